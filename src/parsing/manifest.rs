//! Parsers for tab-separated sample and reference manifests.
//!
//! Reads manifests have 2-4 columns and no header:
//!
//! ```text
//! sample_name<TAB>R1_path[<TAB>R2_path[<TAB>S_path]]
//! ```
//!
//! Reference manifests have exactly two columns: `reference_name<TAB>fasta_path`.
//!
//! Every referenced file must exist. The first row that fails validation
//! aborts the whole parse.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::diagnostics::{Diagnostic, Resolved};
use crate::core::types::{ManifestColumn, PairedEntry, PairingResult, ReferenceManifest, UnpairedEntry};
use crate::utils::validation::optional_cell;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{column} file '{}' does not exist (line {line})", path.display())]
    NotFound {
        column: ManifestColumn,
        path: PathBuf,
        line: usize,
    },

    #[error("Invalid manifest format: {0}")]
    InvalidFormat(String),
}

/// Split a row into trimmed cells, dropping trailing empty cells
fn split_row(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split('\t').map(str::trim).collect();
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

fn require_file(path: &str, column: ManifestColumn, line: usize) -> Result<PathBuf, ParseError> {
    let path = PathBuf::from(path);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ParseError::NotFound { column, path, line })
    }
}

/// Parse a reads manifest file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::NotFound`
/// if a referenced file does not exist, or `ParseError::InvalidFormat` for
/// rows with the wrong number of columns.
pub fn parse_sample_manifest(path: &Path) -> Result<Resolved<PairingResult>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_sample_manifest_text(&content)
}

/// Parse reads manifest text.
///
/// Rows with a mate become paired entries, all others unpaired. Empty cells
/// and the `none`/`null` sentinels are absent; a singleton on a row without a
/// mate is ignored and reported as [`Diagnostic::IgnoredSingleton`].
///
/// # Errors
///
/// See [`parse_sample_manifest`].
pub fn parse_sample_manifest_text(text: &str) -> Result<Resolved<PairingResult>, ParseError> {
    let mut resolved = Resolved::new(PairingResult::default());

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        // Line numbers in errors are 1-based
        let line_num = i + 1;
        let cells = split_row(line);

        if cells.len() < 2 || cells[0].is_empty() || cells[1].is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} needs a sample name and an R1 file"
            )));
        }
        if cells.len() > 4 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} columns, expected at most 4",
                cells.len()
            )));
        }

        let sample = cells[0].to_string();
        let r1 = require_file(cells[1], ManifestColumn::R1, line_num)?;
        let r2 = optional_cell(cells.get(2).copied())
            .map(|p| require_file(p, ManifestColumn::R2, line_num))
            .transpose()?;
        let singleton = optional_cell(cells.get(3).copied())
            .map(|p| require_file(p, ManifestColumn::Singleton, line_num))
            .transpose()?;

        match r2 {
            Some(r2) => resolved.value.paired.push(PairedEntry {
                sample,
                r1,
                r2,
                singleton,
            }),
            None => {
                if let Some(path) = singleton {
                    resolved.push(Diagnostic::IgnoredSingleton {
                        sample: sample.clone(),
                        path,
                        line: line_num,
                    });
                }
                resolved.value.unpaired.push(UnpairedEntry { sample, r1 });
            }
        }
    }

    Ok(resolved)
}

/// Parse a reference manifest file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::NotFound`
/// if a FASTA file does not exist, or `ParseError::InvalidFormat` for rows
/// without exactly two columns.
pub fn parse_reference_manifest(path: &Path) -> Result<ReferenceManifest, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_reference_manifest_text(&content)
}

/// Parse reference manifest text. A repeated reference name replaces the earlier path.
///
/// # Errors
///
/// See [`parse_reference_manifest`].
pub fn parse_reference_manifest_text(text: &str) -> Result<ReferenceManifest, ParseError> {
    let mut references = ReferenceManifest::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let line_num = i + 1;
        let cells = split_row(line);

        if cells.len() != 2 || cells[0].is_empty() || cells[1].is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} must have exactly 2 columns: reference name and FASTA path"
            )));
        }

        let path = require_file(cells[1], ManifestColumn::Fasta, line_num)?;
        references.insert(cells[0], path);
    }

    Ok(references)
}
