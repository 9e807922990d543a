//! PokeInfo - Pokemon information lookup
//!
//! Runs the interactive form by default; `lookup <NAME>` prints one result.

use anyhow::{Context, Result};
use clap::Parser;
use pokeinfo::cli::{Cli, Commands};
use pokeinfo::presenter::InfoPanel;
use pokeinfo::{lookup, tui};
use pokeinfo_common::logging::{self, LogTarget};
use pokeinfo_common::PokeApiClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("Failed to load configuration")?;
    let client = PokeApiClient::from_config(&config)?;

    match cli.command() {
        Commands::Tui => {
            // The terminal belongs to the TUI; trace output goes to a file or nowhere
            if let Some(path) = config.log_file.clone().or_else(logging::default_log_path) {
                if let Err(e) = logging::init(&LogTarget::File(path.clone())) {
                    eprintln!("Warning: logging disabled ({}: {})", path.display(), e);
                }
            }
            tui::run(Arc::new(client), &config).await
        }
        Commands::Lookup { name } => {
            logging::init(&LogTarget::Stderr).context("Failed to initialize logging")?;
            let mut panel = InfoPanel::from_config(&config);
            if lookup::print_lookup(&client, &name, &mut panel).await {
                Ok(())
            } else {
                std::process::exit(1);
            }
        }
    }
}
