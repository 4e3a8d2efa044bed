//! Core data types for sample and reference resolution.
//!
//! - [`SampleEntry`](types::SampleEntry): the files of one sample (R1, optional R2, optional singleton)
//! - [`PairingResult`](types::PairingResult): paired and unpaired samples found in one input
//! - [`SampleMap`](types::SampleMap): the unified sample name to files mapping
//! - [`ReferenceManifest`](types::ReferenceManifest): reference name to FASTA path
//! - [`Diagnostic`](diagnostics::Diagnostic), [`Resolved`](diagnostics::Resolved): non-fatal
//!   warnings returned alongside results
//!
//! Absent mate and singleton files are `None`. The `none`/`null` manifest
//! sentinels never appear in these types; they are handled when reading and
//! writing manifests.

pub mod diagnostics;
pub mod types;
