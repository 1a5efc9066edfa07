//! Telemetry batch - offline sampling run
//!
//! `telemetry-batch` (or `telemetry-batch run`) collects five readings half a
//! second apart, prints them and writes `telemetry_output.txt`.
//! `telemetry-batch import <file>` reads such a file back as JSON.
//! Failures are logged; the process always exits 0.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "telemetry-batch", version, about = "Synthetic telemetry batch run")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Collect, print and persist one batch (default)
    Run,
    /// Parse a telemetry file and print its readings as JSON
    Import { input: PathBuf },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::execute().await,
        Commands::Import { input } => commands::import::execute(&input),
    };

    if let Err(e) = outcome {
        error!("{e:#}");
    }
}
