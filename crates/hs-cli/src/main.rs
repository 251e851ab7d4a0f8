use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hs_cli::commands::{convert, inspect};
use hs_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match &cli.command {
        Some(Commands::Convert {
            file,
            output,
            format,
        }) => {
            convert::run(file, output.as_deref(), *format, &config)?;
        }
        Some(Commands::Inspect {
            file,
            limit,
            json,
            format,
        }) => {
            inspect::run(file, *limit, *json, *format, &config)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
