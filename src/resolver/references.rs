use std::path::Path;

use tracing::debug;

use crate::core::diagnostics::{Diagnostic, Resolved};
use crate::core::types::ReferenceManifest;
use crate::parsing::extension::{is_manifest_file, strip_sequence_extension, SequenceContext};
use crate::parsing::manifest::parse_reference_manifest;
use crate::resolver::{list_directory, ResolveError};

/// Name a reference after its file name minus the FASTA extension.
/// Non-UTF-8 paths are not named, since they cannot be written to a manifest.
fn reference_name(path: &Path) -> Option<&str> {
    path.to_str()?;
    let file_name = path.file_name()?.to_str()?;
    strip_sequence_extension(file_name, SequenceContext::Reference).map(str::trim)
}

/// Collect the FASTA files of a directory, keyed by reference name.
///
/// Files are visited in sorted order; when two files yield the same name the
/// later one replaces the earlier.
///
/// # Errors
///
/// Returns `ResolveError::Io` if the directory cannot be listed.
pub fn references_from_directory(dir: &Path) -> Result<ReferenceManifest, ResolveError> {
    let mut references = ReferenceManifest::new();
    for path in list_directory(dir)? {
        if let Some(name) = reference_name(&path).map(str::to_string) {
            if let Some(previous) = references.insert(name.clone(), path) {
                debug!("Reference '{name}' replaces {}", previous.display());
            }
        }
    }
    Ok(references)
}

/// Resolve a FASTA file, reference manifest, or directory of FASTA files.
///
/// A file that is neither a FASTA file nor a `.tsv` manifest yields an empty
/// manifest and a [`Diagnostic::UnsupportedFormat`]; the caller decides
/// whether that is fatal.
///
/// # Errors
///
/// Returns `ResolveError::InvalidInput` if `input` is neither a file nor a
/// directory, `ResolveError::InvalidManifest` if a manifest is malformed or
/// references a missing file, or `ResolveError::Io` if a directory cannot be listed.
pub fn resolve_references(input: &Path) -> Result<Resolved<ReferenceManifest>, ResolveError> {
    let mut resolved = Resolved::new(ReferenceManifest::new());

    if input.is_file() {
        if let Some(name) = reference_name(input) {
            resolved.value.insert(name, input);
        } else if is_manifest_file(input) {
            debug!("Parsing reference manifest {}", input.display());
            resolved.value = parse_reference_manifest(input).map_err(|source| {
                ResolveError::InvalidManifest {
                    path: input.to_path_buf(),
                    source,
                }
            })?;
        } else {
            resolved.push(Diagnostic::UnsupportedFormat {
                path: input.to_path_buf(),
            });
        }
    } else if input.is_dir() {
        resolved.value = references_from_directory(input)?;
    } else {
        return Err(ResolveError::InvalidInput(input.to_path_buf()));
    }

    debug!("Resolved {} references", resolved.value.len());
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::manifest::ParseError;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_single_fasta() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.fasta");
        std::fs::write(&path, ">seq1\nACGT\n>seq2\nTGCA").unwrap();

        let resolved = resolve_references(&path).unwrap();
        assert_eq!(resolved.value.len(), 1);
        assert_eq!(resolved.value.get("test"), Some(path.as_path()));
    }

    #[test]
    fn test_directory_scan() {
        let dir = TempDir::new().unwrap();
        let names = [
            "sequence.fasta",
            "protein.fa",
            "data.fna",
            "output.ffn",
            "results.faa",
            "report.frn",
            "data.txt",
            "code.py",
            "image.png",
        ];
        for name in names {
            File::create(dir.path().join(name)).unwrap();
        }

        let refs = resolve_references(dir.path()).unwrap().value;
        assert_eq!(refs.len(), 6);
        for (name, file) in [
            ("sequence", "sequence.fasta"),
            ("protein", "protein.fa"),
            ("data", "data.fna"),
            ("output", "output.ffn"),
            ("results", "results.faa"),
            ("report", "report.frn"),
        ] {
            assert_eq!(refs.get(name), Some(dir.path().join(file).as_path()));
        }
    }

    #[test]
    fn test_directory_duplicate_names_overwrite() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("genome.fa")).unwrap();
        File::create(dir.path().join("genome.fasta")).unwrap();

        let refs = references_from_directory(dir.path()).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(
            refs.get("genome"),
            Some(dir.path().join("genome.fasta").as_path())
        );
    }

    #[test]
    fn test_reference_names_are_trimmed() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join(" genome .fa")).unwrap();

        let refs = references_from_directory(dir.path()).unwrap();
        assert_eq!(refs.iter().next().map(|(name, _)| name.as_str()), Some("genome"));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_references(dir.path()).unwrap();
        assert!(resolved.value.is_empty());
    }

    #[test]
    fn test_manifest() {
        let dir = TempDir::new().unwrap();
        let genome = dir.path().join("genome.fasta");
        File::create(&genome).unwrap();
        let manifest = dir.path().join("refs.tsv");
        std::fs::write(&manifest, format!("refA\t{}\n", genome.display())).unwrap();

        let resolved = resolve_references(&manifest).unwrap();
        assert_eq!(resolved.value.get("refA"), Some(genome.as_path()));
    }

    #[test]
    fn test_manifest_missing_fasta() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("refs.tsv");
        std::fs::write(&manifest, "refA\tgenome_that_is_not_here.fasta\n").unwrap();

        let result = resolve_references(&manifest);
        assert!(matches!(
            result,
            Err(ResolveError::InvalidManifest {
                source: ParseError::NotFound { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_unsupported_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        File::create(&path).unwrap();

        let resolved = resolve_references(&path).unwrap();
        assert!(resolved.value.is_empty());
        assert_eq!(
            resolved.diagnostics,
            vec![Diagnostic::UnsupportedFormat { path }]
        );
    }

    #[test]
    fn test_missing_input() {
        let result = resolve_references(Path::new("non_existent_path"));
        assert!(matches!(result, Err(ResolveError::InvalidInput(_))));
    }
}
