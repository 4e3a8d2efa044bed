//! Mate-tag conventions used to recognize paired reads files.
//!
//! A [`MateTag`] family names the R1 tag, its R2 complement, and the singleton
//! tag, e.g. `_R1` / `_R2` / `_RS`. Families are tried in priority order and the
//! first whose R1 tag occurs in a file name governs that file.

/// One mate-tag convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MateTag {
    /// Tag marking the primary (R1) file
    pub first: String,
    /// Tag marking the mate (R2) file
    pub second: String,
    /// Tag marking the singleton file
    pub singleton: String,
}

impl MateTag {
    /// Build a family from its R1 tag by substituting `2` and `S` for `1`.
    ///
    /// Returns `None` if the tag contains no `1`.
    ///
    /// ```
    /// use sample_finder::matching::tags::MateTag;
    ///
    /// let tag = MateTag::from_first("_R1").unwrap();
    /// assert_eq!(tag.second, "_R2");
    /// assert_eq!(tag.singleton, "_RS");
    /// ```
    pub fn from_first(first: &str) -> Option<Self> {
        if !first.contains('1') {
            return None;
        }
        Some(Self {
            first: first.to_string(),
            second: first.replace('1', "2"),
            singleton: first.replace('1', "S"),
        })
    }

    /// Check if the R1 tag occurs in a file name
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.contains(self.first.as_str())
    }

    /// Sample name: the file name up to the rightmost R1 tag
    pub fn sample_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .rfind(self.first.as_str())
            .map(|idx| &file_name[..idx])
    }

    /// File name of the expected mate
    pub fn mate_name(&self, file_name: &str) -> Option<String> {
        self.substitute(file_name, &self.second)
    }

    /// File name of the expected singleton file
    pub fn singleton_name(&self, file_name: &str) -> Option<String> {
        self.substitute(file_name, &self.singleton)
    }

    fn substitute(&self, file_name: &str, replacement: &str) -> Option<String> {
        let idx = file_name.rfind(self.first.as_str())?;
        Some(format!(
            "{}{}{}",
            &file_name[..idx],
            replacement,
            &file_name[idx + self.first.len()..]
        ))
    }
}

/// R1 tags of the default families, in priority order
pub const DEFAULT_FIRST_TAGS: &[&str] = &["_R1", ".R1", "_1", ".1"];

/// Default families: `_R1/_R2`, `.R1/.R2`, `_1/_2`, `.1/.2`
pub fn default_families() -> Vec<MateTag> {
    DEFAULT_FIRST_TAGS
        .iter()
        .filter_map(|t| MateTag::from_first(t))
        .collect()
}

/// Configuration of the pairing algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingConfig {
    /// Tag families in priority order
    pub families: Vec<MateTag>,

    /// Whether to attach singleton files to confirmed pairs
    pub detect_singletons: bool,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            families: default_families(),
            detect_singletons: true,
        }
    }
}

impl PairingConfig {
    #[must_use]
    pub fn without_singletons(mut self) -> Self {
        self.detect_singletons = false;
        self
    }

    /// First family whose R1 tag occurs in the file name
    pub fn match_first(&self, file_name: &str) -> Option<&MateTag> {
        self.families.iter().find(|f| f.matches(file_name))
    }

    /// First mate tag (all R1 tags, then all R2 tags) left in an unpaired stem
    pub fn residual_tag(&self, stem: &str) -> Option<&str> {
        self.families
            .iter()
            .map(|f| f.first.as_str())
            .chain(self.families.iter().map(|f| f.second.as_str()))
            .find(|tag| stem.contains(tag))
    }
}
