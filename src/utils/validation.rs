//! Centralized validation and helper functions.

use std::path::Path;

/// Literal manifest cells that mean "no file"
pub const ABSENT_SENTINELS: &[&str] = &["none", "null"];

/// Check if a manifest cell is an explicit absence sentinel (any case).
///
/// # Examples
///
/// ```
/// use sample_finder::utils::validation::is_absent_sentinel;
///
/// assert!(is_absent_sentinel("None"));
/// assert!(is_absent_sentinel("NULL"));
/// assert!(!is_absent_sentinel("none.fastq"));
/// ```
#[must_use]
pub fn is_absent_sentinel(s: &str) -> bool {
    ABSENT_SENTINELS.iter().any(|v| s.eq_ignore_ascii_case(v))
}

/// Interpret an optional manifest cell, treating empty cells and sentinels as absent.
#[must_use]
pub fn optional_cell(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim)
        .filter(|c| !c.is_empty() && !is_absent_sentinel(c))
}

/// Filter out paths that are spelled as an absence sentinel.
#[must_use]
pub fn present_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| {
        let s = p.to_string_lossy();
        !s.is_empty() && !is_absent_sentinel(&s)
    })
}

/// Check if a file name is hidden (starts with `.`)
#[must_use]
pub fn is_hidden_file_name(name: &str) -> bool {
    name.starts_with('.')
}
