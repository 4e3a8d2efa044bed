//! Top-level dispatch from an input path to a resolved mapping.
//!
//! An input path is one of:
//!
//! - a **directory**: its immediate, non-hidden files are scanned
//! - a **manifest file**: parsed as a tab-separated manifest
//! - for references only, a single **FASTA file**
//!
//! Anything else is an error. See [`samples`] and [`references`].

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parsing::manifest::ParseError;
use crate::utils::validation::is_hidden_file_name;

pub mod references;
pub mod samples;

pub use references::resolve_references;
pub use samples::{resolve_sample_map, resolve_samples};

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{} is neither a file nor directory", .0.display())]
    InvalidInput(PathBuf),

    #[error("Failed to parse manifest {}: {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to detect any reads files and samples for {}", .0.display())]
    EmptyResult(PathBuf),

    #[error("Failed to list directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the immediate, non-hidden regular files of a directory, sorted by path
///
/// # Errors
///
/// Returns `ResolveError::Io` if the directory cannot be read.
pub fn list_directory(dir: &Path) -> Result<Vec<PathBuf>, ResolveError> {
    let io_err = |source| ResolveError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_hidden_file_name);
        if !hidden && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_list_directory() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("b.fastq")).unwrap();
        File::create(dir.path().join("a.fastq")).unwrap();
        File::create(dir.path().join(".hidden.fastq")).unwrap();
        std::fs::create_dir(dir.path().join("nested.fastq")).unwrap();

        let files = list_directory(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.fastq"), dir.path().join("b.fastq")]
        );
    }

    #[test]
    fn test_list_missing_directory() {
        let result = list_directory(Path::new("nonexistent_directory"));
        assert!(matches!(result, Err(ResolveError::Io { .. })));
    }
}
