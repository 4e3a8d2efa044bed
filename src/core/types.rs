use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Manifest column that holds a file path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManifestColumn {
    /// Forward reads, or the only reads file for unpaired samples
    R1,
    /// Reverse reads
    R2,
    /// Reads whose mate was discarded upstream
    #[serde(rename = "S")]
    Singleton,
    /// Reference sequence file of a reference manifest
    #[serde(rename = "FASTA")]
    Fasta,
}

impl std::fmt::Display for ManifestColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::R1 => write!(f, "R1"),
            Self::R2 => write!(f, "R2"),
            Self::Singleton => write!(f, "S"),
            Self::Fasta => write!(f, "FASTA"),
        }
    }
}

/// The files resolved for one sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEntry {
    /// Primary reads file, always present
    #[serde(rename = "R1")]
    pub r1: PathBuf,

    /// Mate reads file, only present for paired samples
    #[serde(rename = "R2")]
    pub r2: Option<PathBuf>,

    /// Singleton reads file, only present alongside a mate
    #[serde(rename = "S")]
    pub singleton: Option<PathBuf>,
}

impl SampleEntry {
    pub fn unpaired(r1: impl Into<PathBuf>) -> Self {
        Self {
            r1: r1.into(),
            r2: None,
            singleton: None,
        }
    }

    pub fn paired(r1: impl Into<PathBuf>, r2: impl Into<PathBuf>) -> Self {
        Self {
            r1: r1.into(),
            r2: Some(r2.into()),
            singleton: None,
        }
    }

    #[must_use]
    pub fn with_singleton(mut self, singleton: impl Into<PathBuf>) -> Self {
        self.singleton = Some(singleton.into());
        self
    }

    pub fn is_paired(&self) -> bool {
        self.r2.is_some()
    }
}

/// A sample whose mate file was found
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PairedEntry {
    pub sample: String,
    pub r1: PathBuf,
    pub r2: PathBuf,
    pub singleton: Option<PathBuf>,
}

/// A sample with a single reads file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct UnpairedEntry {
    pub sample: String,
    pub r1: PathBuf,
}

/// Paired and unpaired samples found in one input.
///
/// No path appears in both collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PairingResult {
    pub paired: Vec<PairedEntry>,
    pub unpaired: Vec<UnpairedEntry>,
}

impl PairingResult {
    pub fn is_empty(&self) -> bool {
        self.paired.is_empty() && self.unpaired.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paired.len() + self.unpaired.len()
    }

    /// Merge into a single mapping keyed by sample name.
    ///
    /// Paired entries are visited before unpaired ones and the first entry
    /// seen for a name is kept, so a name produced by both groups stays paired.
    pub fn into_sample_map(self) -> SampleMap {
        let mut samples = SampleMap::new();

        for entry in self.paired {
            let mut sample = SampleEntry::paired(entry.r1, entry.r2);
            sample.singleton = entry.singleton;
            samples.insert_first(entry.sample, sample);
        }

        for entry in self.unpaired {
            samples.insert_first(entry.sample, SampleEntry::unpaired(entry.r1));
        }

        samples
    }
}

/// Sample name to files, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleMap(IndexMap<String, SampleEntry>);

impl SampleMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert unless the name is already present. Returns whether the entry was kept.
    pub fn insert_first(&mut self, name: impl Into<String>, entry: SampleEntry) -> bool {
        match self.0.entry(name.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&SampleEntry> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SampleEntry)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn paired_count(&self) -> usize {
        self.0.values().filter(|e| e.is_paired()).count()
    }
}

impl FromIterator<(String, SampleEntry)> for SampleMap {
    fn from_iter<I: IntoIterator<Item = (String, SampleEntry)>>(iter: I) -> Self {
        let mut samples = Self::new();
        for (name, entry) in iter {
            samples.insert_first(name, entry);
        }
        samples
    }
}

/// Reference name to FASTA path, in insertion order.
///
/// Inserting an existing name replaces its path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceManifest(IndexMap<String, PathBuf>);

impl ReferenceManifest {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a reference, returning the path it replaced
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.0.insert(name.into(), path.into())
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.0.get(name).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PathBuf)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
