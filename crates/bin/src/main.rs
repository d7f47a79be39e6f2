mod cli;
mod commands;
mod output;
mod store;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotcollection=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "Running command");
    commands::run(&cli)
}
