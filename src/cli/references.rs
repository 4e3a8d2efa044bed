use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::diagnostics::Diagnostic;
use crate::core::types::ReferenceManifest;
use crate::parsing::fasta::combine_fastas_to_file;
use crate::parsing::writer::{write_reference_manifest, write_reference_manifest_file};
use crate::resolver::resolve_references;

#[derive(Args)]
pub struct ReferencesArgs {
    /// FASTA file, directory of FASTA files, or a reference manifest (.tsv)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write the reference manifest to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Concatenate all references into this FASTA, prefixing IDs with the reference name
    #[arg(long)]
    pub combine: Option<PathBuf>,
}

/// Execute references subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be resolved, resolves to no
/// references, or an output file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReferencesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let resolved = resolve_references(&args.input)
        .with_context(|| format!("Failed to resolve references from {}", args.input.display()))?;

    if resolved.value.is_empty() {
        anyhow::bail!("No reference FASTA files found for {}", args.input.display());
    }

    info!("Resolved {} references", resolved.value.len());

    if let Some(output) = &args.output {
        write_reference_manifest_file(&resolved.value, output)
            .with_context(|| format!("Failed to write manifest {}", output.display()))?;
        info!("Wrote manifest to {}", output.display());
    }

    if let Some(combined) = &args.combine {
        combine_fastas_to_file(&resolved.value, combined)
            .with_context(|| format!("Failed to write combined FASTA {}", combined.display()))?;
        info!("Wrote combined FASTA to {}", combined.display());
    }

    match format {
        OutputFormat::Text => print_text(&resolved.value, &resolved.diagnostics),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "references": resolved.value,
                "diagnostics": resolved.diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_reference_manifest(&resolved.value, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn print_text(references: &ReferenceManifest, diagnostics: &[Diagnostic]) {
    println!("References: {}", references.len());
    println!("{}", "=".repeat(60));

    for (name, path) in references.iter() {
        println!("  {name}\t{}", path.display());
    }

    if !diagnostics.is_empty() {
        println!("\nWarnings:");
        for diagnostic in diagnostics {
            println!("  - {diagnostic}");
        }
    }
}
