use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::diagnostics::Diagnostic;
use crate::core::types::SampleMap;
use crate::matching::tags::PairingConfig;
use crate::parsing::writer::{write_sample_manifest, write_sample_manifest_file};
use crate::resolver::resolve_sample_map;

#[derive(Args)]
pub struct SamplesArgs {
    /// Directory of reads files, or a tab-separated reads manifest
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write the canonical manifest to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not attach singleton (e.g. `_RS`) files to pairs
    #[arg(long)]
    pub no_singletons: bool,

    /// Exit with an error if any warning was raised
    #[arg(long)]
    pub strict: bool,
}

/// Execute samples subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be resolved, the manifest cannot be
/// written, or `--strict` is set and warnings were raised.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SamplesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut config = PairingConfig::default();
    if args.no_singletons {
        config = config.without_singletons();
    }

    let resolved = resolve_sample_map(&args.input, &config)
        .with_context(|| format!("Failed to resolve samples from {}", args.input.display()))?;

    info!(
        "Resolved {} samples ({} paired)",
        resolved.value.len(),
        resolved.value.paired_count()
    );

    if let Some(output) = &args.output {
        write_sample_manifest_file(&resolved.value, output)
            .with_context(|| format!("Failed to write manifest {}", output.display()))?;
        info!("Wrote manifest to {}", output.display());
    }

    match format {
        OutputFormat::Text => print_text(&resolved.value, &resolved.diagnostics),
        OutputFormat::Json => print_json(&resolved.value, &resolved.diagnostics)?,
        OutputFormat::Tsv => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_sample_manifest(&resolved.value, &mut out)?;
            out.flush()?;
        }
    }

    if args.strict && !resolved.diagnostics.is_empty() {
        anyhow::bail!(
            "{} warning(s) raised while resolving {}",
            resolved.diagnostics.len(),
            args.input.display()
        );
    }

    Ok(())
}

fn print_text(samples: &SampleMap, diagnostics: &[Diagnostic]) {
    println!(
        "Samples: {} ({} paired, {} unpaired)",
        samples.len(),
        samples.paired_count(),
        samples.len() - samples.paired_count()
    );
    println!("{}", "=".repeat(60));

    for (name, entry) in samples.iter() {
        println!("\n{name}");
        println!("  R1: {}", entry.r1.display());
        if let Some(r2) = &entry.r2 {
            println!("  R2: {}", r2.display());
        }
        if let Some(s) = &entry.singleton {
            println!("  S:  {}", s.display());
        }
    }

    if !diagnostics.is_empty() {
        println!("\nWarnings:");
        for diagnostic in diagnostics {
            println!("  - {diagnostic}");
        }
    }
}

fn print_json(samples: &SampleMap, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "samples": samples,
        "diagnostics": diagnostics,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
