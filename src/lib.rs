//! # sample-finder
//!
//! A library for inferring sample manifests for sequencing pipelines.
//!
//! Pipelines take their inputs either as a directory of reads files or as a
//! tab-separated manifest. `sample-finder` turns either form into one mapping
//! of sample name to files (R1, optional R2, optional singleton), and writes
//! that mapping back out as a canonical manifest.
//!
//! ## Features
//!
//! - **Mate-pair inference**: Recognizes `_R1/_R2`, `.R1/.R2`, `_1/_2` and `.1/.2` naming
//! - **Singleton detection**: Attaches `_RS`-style singleton files to their pair
//! - **Orphan warnings**: Flags unpaired files whose names still carry a mate tag
//! - **Manifest validation**: Every file named in a manifest must exist
//! - **Reference collections**: Resolves FASTA files, directories, and reference
//!   manifests, and concatenates them with prefixed sequence IDs
//!
//! ## Example
//!
//! ```rust,no_run
//! use sample_finder::{resolve_sample_map, PairingConfig};
//! use std::path::Path;
//!
//! let resolved = resolve_sample_map(Path::new("reads/"), &PairingConfig::default()).unwrap();
//!
//! for warning in &resolved.diagnostics {
//!     eprintln!("warning: {warning}");
//! }
//! for (name, entry) in resolved.value.iter() {
//!     println!("{name}: {} (paired: {})", entry.r1.display(), entry.is_paired());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sample, pairing and reference types, and diagnostics
//! - [`matching`]: Mate-tag matching and file pairing
//! - [`parsing`]: Extension recognition, manifest parsing and writing, FASTA concatenation
//! - [`resolver`]: Dispatch from an input path to a resolved mapping
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod resolver;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::diagnostics::{Diagnostic, Resolved};
pub use crate::core::types::*;
pub use matching::pairing::pair_files;
pub use matching::tags::{MateTag, PairingConfig};
pub use resolver::{resolve_references, resolve_sample_map, resolve_samples, ResolveError};
