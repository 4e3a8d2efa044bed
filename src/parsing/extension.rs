//! Recognition of sequence file names.
//!
//! Supported extensions, matched case-insensitively and optionally followed by `.gz`:
//! - reference context: `.fasta`, `.fa`, `.fna`, `.ffn`, `.faa`, `.frn`
//! - reads context: `.fasta`, `.fastq`, `.fq`

use std::path::Path;

/// Extensions accepted for reference sequences
pub const REFERENCE_EXTENSIONS: &[&str] = &["fasta", "fa", "fna", "ffn", "faa", "frn"];

/// Extensions accepted for sequencing reads
pub const READS_EXTENSIONS: &[&str] = &["fasta", "fastq", "fq"];

/// Optional compression suffix after a sequence extension
pub const COMPRESSION_EXTENSION: &str = "gz";

/// Extension of manifest files given as single-file inputs
pub const MANIFEST_EXTENSION: &str = "tsv";

/// Which set of sequence extensions applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceContext {
    Reference,
    Reads,
}

impl SequenceContext {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Reference => REFERENCE_EXTENSIONS,
            Self::Reads => READS_EXTENSIONS,
        }
    }
}

/// Length in bytes of the stem left after removing a recognized extension,
/// or `None` if the name has no recognized extension or a blank stem.
fn stem_len(file_name: &str, context: SequenceContext) -> Option<usize> {
    // ASCII lowercasing keeps byte offsets identical to the input name
    let lower = file_name.to_ascii_lowercase();
    let body = lower
        .strip_suffix(COMPRESSION_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(lower.as_str());

    context.extensions().iter().find_map(|ext| {
        let stem = body.strip_suffix(*ext)?.strip_suffix('.')?;
        (!stem.trim().is_empty()).then_some(stem.len())
    })
}

/// Check if a file name ends with a recognized sequence extension
pub fn is_sequence_file(file_name: &str, context: SequenceContext) -> bool {
    stem_len(file_name, context).is_some()
}

/// Remove the recognized sequence and compression extensions from a file name
pub fn strip_sequence_extension(file_name: &str, context: SequenceContext) -> Option<&str> {
    stem_len(file_name, context).map(|len| &file_name[..len])
}

/// Check if the path names a manifest file
pub fn is_manifest_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(MANIFEST_EXTENSION))
}

/// Check if the path is a gzipped file
pub fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(COMPRESSION_EXTENSION))
}
