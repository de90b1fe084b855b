//! Command-line interface for strictly_launcher.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Marker;

/// Strictly Launcher - pick a project from the menu
#[derive(Parser, Debug)]
#[command(name = "strictly_launcher")]
#[command(about = "Interactive project launcher with tic-tac-toe vs AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "strictly_launcher.toml")]
    pub config: PathBuf,

    /// Marker the human plays, overriding the config (X moves first)
    #[arg(long)]
    pub human: Option<Marker>,

    /// Subcommand to run (defaults to the menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Show the interactive project menu
    #[default]
    Menu,

    /// Skip the menu and play one game of tic-tac-toe
    Play,

    /// Print the menu entries and exit
    List,
}
