//! Reading and writing sample and reference files.
//!
//! - **Extensions**: recognition of FASTA/FASTQ file names, see [`extension`]
//! - **Manifests**: tab-separated reads and reference manifests, see [`manifest`]
//! - **Writers**: canonical manifest output, see [`writer`]
//! - **FASTA**: concatenation of references with prefixed IDs, see [`fasta`]
//!
//! ## Manifest Columns
//!
//! | Column | Description | Required |
//! |--------|-------------|----------|
//! | 1 | Sample name | Yes |
//! | 2 | R1 file | Yes |
//! | 3 | R2 file | No |
//! | 4 | Singleton file | No |
//!
//! A `none` or `null` cell (any case) in columns 3 and 4 means the file is absent.

pub mod extension;
pub mod fasta;
pub mod manifest;
pub mod writer;
