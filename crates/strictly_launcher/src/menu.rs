//! Project menu and its read-dispatch loop.

use crate::projects::{run_dashboard_builder, run_model_training, run_report_generator};
use crate::session::run_tic_tac_toe;
use crate::{Console, LauncherConfig, LauncherError};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Prompt shown under the menu.
pub const SELECTION_PROMPT: &str = "Enter your selection (1-5): ";

const GOODBYE: &str = "Exiting. Goodbye!";

/// Entries on the launcher menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Project {
    /// Interactive game against the heuristic AI.
    TicTacToe,
    /// Report generator stub.
    ReportGenerator,
    /// Dashboard builder stub.
    DashboardBuilder,
    /// Model training stub.
    ModelTraining,
    /// Leave the launcher.
    Exit,
}

impl Project {
    /// Key the user types to pick this entry.
    pub fn key(self) -> &'static str {
        match self {
            Self::TicTacToe => "1",
            Self::ReportGenerator => "2",
            Self::DashboardBuilder => "3",
            Self::ModelTraining => "4",
            Self::Exit => "5",
        }
    }

    /// Name shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::TicTacToe => "Tic Tac Toe (vs AI)",
            Self::ReportGenerator => "Report Generator",
            Self::DashboardBuilder => "Dashboard Builder",
            Self::ModelTraining => "Model Training",
            Self::Exit => "Exit",
        }
    }

    /// Looks up the entry for a typed key.
    #[instrument]
    pub fn from_choice(choice: &str) -> Option<Self> {
        Self::iter().find(|project| project.key() == choice)
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What the menu loop does after handling a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Show the menu again.
    Continue,
    /// Stop the loop.
    Exit,
}

/// Prints the numbered project menu.
pub fn display_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(), LauncherError> {
    console.say("Select a project to run:\n")?;
    for project in Project::iter() {
        console.say(format!(" {}. {}", project.key(), project.label()))?;
    }
    console.say("")
}

/// Carries out the action for a menu choice.
#[instrument(skip(console, config))]
pub fn handle_choice<R: BufRead, W: Write>(
    choice: &str,
    console: &mut Console<R, W>,
    config: &LauncherConfig,
) -> Result<MenuAction, LauncherError> {
    let Some(project) = Project::from_choice(choice) else {
        debug!("Unknown menu choice");
        console.say("Invalid selection. Please choose a number from the menu.\n")?;
        return Ok(MenuAction::Continue);
    };

    match project {
        Project::Exit => {
            console.say(GOODBYE)?;
            return Ok(MenuAction::Exit);
        }
        Project::TicTacToe => {
            announce(console, project)?;
            run_tic_tac_toe(console, config)?;
        }
        Project::ReportGenerator => {
            announce(console, project)?;
            run_report_generator(console)?;
        }
        Project::DashboardBuilder => {
            announce(console, project)?;
            run_dashboard_builder(console)?;
        }
        Project::ModelTraining => {
            announce(console, project)?;
            run_model_training(console)?;
        }
    }

    Ok(MenuAction::Continue)
}

fn announce<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    project: Project,
) -> Result<(), LauncherError> {
    info!(%project, "Launching project");
    console.say(format!("Launching: {}\n", project))
}

/// Shows the menu and dispatches choices until the user exits.
///
/// End of input, at the menu or mid-game, ends the loop with a goodbye
/// instead of an error.
#[instrument(skip_all)]
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &LauncherConfig,
) -> Result<(), LauncherError> {
    loop {
        display_menu(console)?;

        let Some(choice) = console.prompt(SELECTION_PROMPT)? else {
            console.say(format!("\n{}", GOODBYE))?;
            return Ok(());
        };

        match handle_choice(&choice, console, config) {
            Ok(MenuAction::Continue) => {}
            Ok(MenuAction::Exit) => return Ok(()),
            Err(LauncherError::InputClosed) => {
                warn!("Input closed during a project");
                console.say(format!("\n{}", GOODBYE))?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}
