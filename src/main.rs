use clap::Parser;
use sample_finder::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("sample_finder=debug,info")
    } else {
        EnvFilter::new("sample_finder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Samples(args) => {
            cli::samples::run(args, cli.format)?;
        }
        cli::Commands::References(args) => {
            cli::references::run(args, cli.format)?;
        }
    }

    Ok(())
}
