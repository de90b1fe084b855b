//! Strictly Launcher - interactive project menu.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_launcher::{display_menu, run_menu, run_tic_tac_toe, Console, LauncherConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = LauncherConfig::load_or_default(&cli.config)?;
    if let Some(marker) = cli.human {
        config = config.with_human_marker(marker);
    }

    initialize_tracing(&config);
    info!(config_path = %cli.config.display(), "Starting launcher");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    match cli.command.unwrap_or_default() {
        Command::Menu => run_menu(&mut console, &config)?,
        Command::Play => {
            run_tic_tac_toe(&mut console, &config)?;
        }
        Command::List => display_menu(&mut console)?,
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with the game on stdout.
#[instrument(skip(config))]
fn initialize_tracing(config: &LauncherConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
}
