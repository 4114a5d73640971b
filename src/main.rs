mod artifact;
mod config;
mod describe;
mod errors;
mod resolver;
mod stamp;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stampver", about = "Resolve and stamp the project release version")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the release version and write it to the version artifact
    Version,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the confirmation banner
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            let cfg = config::load()?;
            stamp::run(&cfg)?;
            Ok(())
        }
    }
}
