//! Command-line interface for sample-finder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **samples**: Resolve a reads directory or manifest into a canonical manifest
//! - **references**: Resolve FASTA references and optionally concatenate them
//!
//! ## Usage
//!
//! ```text
//! # Pair the reads in a directory and print the manifest
//! sample-finder samples reads/ --format tsv
//!
//! # Validate an existing manifest and rewrite it canonically
//! sample-finder samples samples.tsv --output samples.clean.tsv
//!
//! # Collect reference FASTAs and build one combined FASTA
//! sample-finder references refs/ --output refs.tsv --combine combined.fasta
//! ```

use clap::{Parser, Subcommand};

pub mod references;
pub mod samples;

#[derive(Parser)]
#[command(name = "sample-finder")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Infer and normalize sample manifests for sequencing pipelines")]
#[command(
    long_about = "sample-finder discovers which files belong together as a sample.\n\nGiven a directory of reads it pairs R1/R2 files by their naming convention; given a manifest it validates that every listed file exists. Either way it produces one canonical manifest."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve reads files into samples
    Samples(samples::SamplesArgs),

    /// Resolve reference FASTA files
    References(references::ReferencesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
