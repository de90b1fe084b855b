//! Human player reading moves from the console.

use super::Player;
use crate::input::parse_move;
use crate::{Console, LauncherError};
use std::io::{BufRead, Write};
use strictly_tictactoe::{GameInProgress, Marker, Position};
use tracing::{debug, instrument};

/// Prompt shown before every move attempt.
pub const MOVE_PROMPT: &str = "Choose your move (1-9): ";

/// Human player typing 1-9 at the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    marker: Marker,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

impl Player for HumanPlayer {
    /// Re-prompts until the input names an empty square.
    ///
    /// Fails with [`LauncherError::InputClosed`] if input ends first.
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move<R: BufRead, W: Write>(
        &mut self,
        game: &GameInProgress,
        console: &mut Console<R, W>,
    ) -> Result<Position, LauncherError> {
        loop {
            let line = console
                .prompt(MOVE_PROMPT)?
                .ok_or(LauncherError::InputClosed)?;

            match parse_move(&line, game.board()) {
                Ok(position) => return Ok(position),
                Err(rejection) => {
                    debug!(input = %line, ?rejection, "Rejected move input");
                    console.say(rejection)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn marker(&self) -> Marker {
        self.marker
    }
}
