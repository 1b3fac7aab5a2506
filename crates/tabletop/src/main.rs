//! Tabletop CLI binary.
//!
//! Operator access to the entity store without going through the chat
//! platform: create and inspect players, campaigns and characters.

use clap::Parser;
use tabletop::{EntityStore, StoreConfig};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = StoreConfig::load(cli.config.as_deref())?;
    let store = EntityStore::shared(&config)?;

    cli::handle_command(&store, cli.command)?;

    Ok(())
}
