use std::path::PathBuf;

use serde::Serialize;
use tracing::warn;

/// A non-fatal problem noticed while resolving an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An unpaired file whose stem still carries a mate tag, probably an
    /// orphaned mate whose partner is missing
    AmbiguousName { path: PathBuf, tag: String },

    /// A single-file input that is neither a sequence file nor a manifest
    UnsupportedFormat { path: PathBuf },

    /// A manifest row with a singleton file but no mate
    IgnoredSingleton {
        sample: String,
        path: PathBuf,
        line: usize,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbiguousName { path, tag } => {
                let name = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
                write!(
                    f,
                    "Possible orphaned paired read detected for {name} with tag {tag}"
                )
            }
            Self::UnsupportedFormat { path } => {
                write!(f, "Unsupported file format: {}", path.display())
            }
            Self::IgnoredSingleton { sample, path, line } => write!(
                f,
                "Ignoring singleton file {} for unpaired sample '{sample}' (line {line})",
                path.display()
            ),
        }
    }
}

/// A resolution result together with the diagnostics raised while producing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Resolved<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// Record a diagnostic and log it as a warning
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }
}
