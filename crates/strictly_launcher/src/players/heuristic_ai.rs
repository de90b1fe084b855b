//! Computer player backed by the engine's one-ply heuristic.

use super::Player;
use crate::{Console, LauncherError};
use std::io::{BufRead, Write};
use strictly_tictactoe::{choose_ai_move, GameInProgress, Marker, MoveError, Position};
use tracing::{info, instrument};

/// AI that wins, blocks, or takes the best free square, in that order.
#[derive(Debug, Clone)]
pub struct HeuristicAi {
    name: String,
    marker: Marker,
}

impl HeuristicAi {
    /// Creates a new heuristic AI.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

impl Player for HeuristicAi {
    /// Picks a move and announces it as `AI chooses position N.`
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move<R: BufRead, W: Write>(
        &mut self,
        game: &GameInProgress,
        console: &mut Console<R, W>,
    ) -> Result<Position, LauncherError> {
        let position = choose_ai_move(game.board(), self.marker, self.marker.opponent())
            .ok_or(MoveError::GameOver)?;

        info!(position = ?position, "AI chose position");
        console.say(format!("{} chooses position {}.", self.name, position.menu_number()))?;
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn marker(&self) -> Marker {
        self.marker
    }
}
