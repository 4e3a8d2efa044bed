use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::diagnostics::{Diagnostic, Resolved};
use crate::core::types::{PairedEntry, PairingResult, UnpairedEntry};
use crate::matching::tags::{MateTag, PairingConfig};
use crate::parsing::extension::{strip_sequence_extension, SequenceContext};

/// A candidate reads file with its derived stem and detected mate tag
#[derive(Debug, Clone)]
pub struct RawFileRecord<'a> {
    pub path: &'a Path,
    pub file_name: &'a str,
    /// File name minus the recognized sequence and compression extensions,
    /// trimmed of surrounding whitespace
    pub stem: &'a str,
    /// Highest-priority family whose R1 tag occurs in the file name
    pub tag: Option<&'a MateTag>,
}

impl<'a> RawFileRecord<'a> {
    /// Build a record, or `None` if the file has no recognized reads extension.
    ///
    /// Paths that are not valid UTF-8 are skipped: manifests are text, and such
    /// a path could not be written out and found again.
    pub fn new(path: &'a Path, config: &'a PairingConfig) -> Option<Self> {
        if path.to_str().is_none() {
            debug!("Skipping non-UTF-8 path {}", path.display());
            return None;
        }
        let file_name = path.file_name()?.to_str()?;
        let stem = strip_sequence_extension(file_name, SequenceContext::Reads)?.trim();
        Some(Self {
            path,
            file_name,
            stem,
            tag: config.match_first(file_name),
        })
    }
}

/// Pair reads files by their mate tags.
///
/// A file whose name carries an R1 tag is paired when the file with the
/// complementary R2 tag is also in `files`; a singleton file is attached when
/// present and enabled. Every other recognized file becomes an unpaired entry
/// named by its stem, with an [`Diagnostic::AmbiguousName`] when that stem
/// still contains a mate tag. Files without a recognized reads extension are
/// ignored.
///
/// The classification depends only on the set of paths, not their order; both
/// output collections are sorted.
pub fn pair_files<P: AsRef<Path>>(files: &[P], config: &PairingConfig) -> Resolved<PairingResult> {
    // Keyed by path so duplicates collapse and iteration is ordered
    let records: BTreeMap<&Path, RawFileRecord> = files
        .iter()
        .filter_map(|p| RawFileRecord::new(p.as_ref(), config))
        .map(|r| (r.path, r))
        .collect();

    let mut absorbed: HashSet<PathBuf> = HashSet::new();
    let mut paired = Vec::new();

    for record in records.values() {
        let Some(tag) = record.tag else { continue };
        // Sample names are stored trimmed, as the manifest parser reads them back
        let (Some(sample), Some(mate_name)) = (
            tag.sample_name(record.file_name)
                .map(str::trim)
                .filter(|s| !s.is_empty()),
            tag.mate_name(record.file_name),
        ) else {
            continue;
        };

        let mate = record.path.with_file_name(mate_name);
        if !records.contains_key(mate.as_path()) {
            continue;
        }

        let singleton = if config.detect_singletons {
            tag.singleton_name(record.file_name)
                .map(|name| record.path.with_file_name(name))
                .filter(|s| records.contains_key(s.as_path()))
        } else {
            None
        };

        debug!(
            "Paired {} with {} (tag {})",
            record.path.display(),
            mate.display(),
            tag.first
        );

        absorbed.insert(record.path.to_path_buf());
        absorbed.insert(mate.clone());
        if let Some(s) = &singleton {
            absorbed.insert(s.clone());
        }

        paired.push(PairedEntry {
            sample: sample.to_string(),
            r1: record.path.to_path_buf(),
            r2: mate,
            singleton,
        });
    }

    let mut resolved = Resolved::new(PairingResult::default());

    for record in records.values() {
        if absorbed.contains(record.path) {
            continue;
        }

        if let Some(tag) = config.residual_tag(record.stem) {
            resolved.push(Diagnostic::AmbiguousName {
                path: record.path.to_path_buf(),
                tag: tag.to_string(),
            });
        }

        resolved.value.unpaired.push(UnpairedEntry {
            sample: record.stem.to_string(),
            r1: record.path.to_path_buf(),
        });
    }

    paired.sort();
    resolved.value.paired = paired;
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(files: &[&str]) -> Resolved<PairingResult> {
        pair_files(files, &PairingConfig::default())
    }

    fn paired_entry(sample: &str, r1: &str, r2: &str, s: Option<&str>) -> PairedEntry {
        PairedEntry {
            sample: sample.to_string(),
            r1: PathBuf::from(r1),
            r2: PathBuf::from(r2),
            singleton: s.map(PathBuf::from),
        }
    }

    fn unpaired_entry(sample: &str, r1: &str) -> UnpairedEntry {
        UnpairedEntry {
            sample: sample.to_string(),
            r1: PathBuf::from(r1),
        }
    }

    #[test]
    fn test_simple_pair_and_unpaired() {
        let resolved = pair(&["s1_R1.fastq", "s1_R2.fastq", "s2.fastq"]);
        assert_eq!(
            resolved.value.paired,
            vec![paired_entry("s1", "s1_R1.fastq", "s1_R2.fastq", None)]
        );
        assert_eq!(resolved.value.unpaired, vec![unpaired_entry("s2", "s2.fastq")]);
        assert!(resolved.diagnostics.is_empty());
    }

    #[test]
    fn test_all_tag_families() {
        let files = [
            "/d/sample1_R1.fastq",
            "/d/sample1_R2.fastq",
            "/d/sample2_R1_001.fastq.gz",
            "/d/sample2_R2_001.fastq.gz",
            "/d/sample2_RS_001.fastq.gz",
            "/d/sample3.fastq",
            "/d/sample4_R2.fastq",
            "/d/sample5.fasta.gz",
            "/d/sample6.fastq.gz",
            "/d/sample7.R1.fastq",
            "/d/sample7.R2.fastq",
            "/d/sample8_1.FASTQ.GZ",
            "/d/sample8_2.FASTQ.GZ",
            "/d/sample9.1.001.fq.gz",
            "/d/sample9.2.001.fq.gz",
            "/d/notes.txt",
        ];
        let resolved = pair(&files);
        let result = &resolved.value;

        assert_eq!(result.paired.len(), 5);
        assert!(result.paired.contains(&paired_entry(
            "sample1",
            "/d/sample1_R1.fastq",
            "/d/sample1_R2.fastq",
            None
        )));
        assert!(result.paired.contains(&paired_entry(
            "sample2",
            "/d/sample2_R1_001.fastq.gz",
            "/d/sample2_R2_001.fastq.gz",
            Some("/d/sample2_RS_001.fastq.gz")
        )));
        assert!(result.paired.contains(&paired_entry(
            "sample7",
            "/d/sample7.R1.fastq",
            "/d/sample7.R2.fastq",
            None
        )));
        assert!(result.paired.contains(&paired_entry(
            "sample8",
            "/d/sample8_1.FASTQ.GZ",
            "/d/sample8_2.FASTQ.GZ",
            None
        )));
        assert!(result.paired.contains(&paired_entry(
            "sample9",
            "/d/sample9.1.001.fq.gz",
            "/d/sample9.2.001.fq.gz",
            None
        )));

        assert_eq!(
            result.unpaired,
            vec![
                unpaired_entry("sample3", "/d/sample3.fastq"),
                unpaired_entry("sample4_R2", "/d/sample4_R2.fastq"),
                unpaired_entry("sample5", "/d/sample5.fasta.gz"),
                unpaired_entry("sample6", "/d/sample6.fastq.gz"),
            ]
        );

        assert_eq!(resolved.diagnostics.len(), 1);
    }

    #[test]
    fn test_orphaned_mate_warns_once() {
        let resolved = pair(&["sample7_R2.fastq"]);
        assert!(resolved.value.paired.is_empty());
        assert_eq!(
            resolved.value.unpaired,
            vec![unpaired_entry("sample7_R2", "sample7_R2.fastq")]
        );
        assert_eq!(
            resolved.diagnostics,
            vec![Diagnostic::AmbiguousName {
                path: PathBuf::from("sample7_R2.fastq"),
                tag: "_R2".to_string(),
            }]
        );
    }

    #[test]
    fn test_orphaned_primary_warns() {
        let resolved = pair(&["lonely_R1.fq"]);
        assert_eq!(resolved.value.unpaired.len(), 1);
        assert_eq!(resolved.diagnostics.len(), 1);
        assert!(resolved.diagnostics[0].to_string().contains("lonely_R1.fq"));
    }

    #[test]
    fn test_order_independent() {
        let forward = pair(&["b_R1.fq", "b_R2.fq", "a_1.fq", "a_2.fq", "c.fq", "d_R2.fq"]);
        let reverse = pair(&["d_R2.fq", "c.fq", "a_2.fq", "a_1.fq", "b_R2.fq", "b_R1.fq"]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_singletons_disabled() {
        let files = ["x_R1.fastq", "x_R2.fastq", "x_RS.fastq"];
        let resolved = pair_files(&files, &PairingConfig::default().without_singletons());
        assert_eq!(
            resolved.value.paired,
            vec![paired_entry("x", "x_R1.fastq", "x_R2.fastq", None)]
        );
        // The singleton file falls back to an unpaired sample of its own
        assert_eq!(
            resolved.value.unpaired,
            vec![unpaired_entry("x_RS", "x_RS.fastq")]
        );
    }

    #[test]
    fn test_mate_must_share_directory() {
        let resolved = pair(&["/a/s_R1.fastq", "/b/s_R2.fastq"]);
        assert!(resolved.value.paired.is_empty());
        assert_eq!(resolved.value.unpaired.len(), 2);
    }

    #[test]
    fn test_unrecognized_files_are_invisible() {
        let resolved = pair(&["reads_R1.bam", "reads_R2.bam", "README"]);
        assert!(resolved.value.is_empty());
        assert!(resolved.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_sample_name_stays_unpaired() {
        let resolved = pair(&["_R1.fastq", "_R2.fastq"]);
        assert!(resolved.value.paired.is_empty());
        assert_eq!(
            resolved.value.unpaired,
            vec![
                unpaired_entry("_R1", "_R1.fastq"),
                unpaired_entry("_R2", "_R2.fastq"),
            ]
        );
        assert_eq!(resolved.diagnostics.len(), 2);

        // Whitespace-only names count as empty too
        let resolved = pair(&[" _1.fq", " _2.fq"]);
        assert!(resolved.value.paired.is_empty());
        assert_eq!(resolved.value.unpaired[0].sample, "_1");
    }

    #[test]
    fn test_sample_names_are_trimmed() {
        let resolved = pair(&["s1 _R1.fastq", "s1 _R2.fastq", " s2 .fq"]);
        assert_eq!(
            resolved.value.paired,
            vec![paired_entry("s1", "s1 _R1.fastq", "s1 _R2.fastq", None)]
        );
        assert_eq!(resolved.value.unpaired, vec![unpaired_entry("s2", " s2 .fq")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = Path::new(OsStr::from_bytes(b"/data/run\xff"));
        let files = [dir.join("s_R1.fastq"), dir.join("s_R2.fastq"), PathBuf::from("/ok/t.fq")];
        let resolved = pair_files(&files, &PairingConfig::default());
        assert!(resolved.value.paired.is_empty());
        assert_eq!(resolved.value.unpaired, vec![unpaired_entry("t", "/ok/t.fq")]);
    }

    #[test]
    fn test_first_matching_family_governs() {
        // `_R1` wins; its `_R2` partner is missing, so `_1` pairing is never tried
        let resolved = pair(&["s_1_R1.fq", "s_2_R1.fq"]);
        assert!(resolved.value.paired.is_empty());
        assert_eq!(resolved.value.unpaired.len(), 2);
    }
}
