//! Strictly Launcher - interactive project menu.
//!
//! The launcher shows a numbered menu of projects. Most are stubs that
//! print their pipeline steps; the first starts a tic-tac-toe game
//! against the heuristic AI from [`strictly_tictactoe`].
//!
//! All terminal I/O goes through a [`Console`], so the whole menu can be
//! driven from scripted input:
//!
//! ```
//! use std::io::Cursor;
//! use strictly_launcher::{run_menu, Console, LauncherConfig};
//!
//! let mut console = Console::new(Cursor::new("2\n5\n"), Vec::new());
//! run_menu(&mut console, &LauncherConfig::default()).unwrap();
//!
//! let (_, output) = console.into_parts();
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("Generating reports..."));
//! assert!(output.ends_with("Exiting. Goodbye!\n"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod error;
mod input;
mod menu;
mod players;
mod projects;
mod render;
mod session;

pub use config::{LauncherConfig, DEFAULT_LOG_FILTER};
pub use console::Console;
pub use error::{ConfigError, LauncherError};
pub use input::{parse_move, InputRejection};
pub use menu::{display_menu, handle_choice, run_menu, MenuAction, Project, SELECTION_PROMPT};
pub use players::{HeuristicAi, HumanPlayer, Player};
pub use projects::{run_dashboard_builder, run_model_training, run_report_generator};
pub use render::render_board;
pub use session::run_tic_tac_toe;
