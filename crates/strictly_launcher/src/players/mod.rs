//! Player trait and implementations.

mod heuristic_ai;
mod human;

pub use heuristic_ai::HeuristicAi;
pub use human::HumanPlayer;

use crate::{Console, LauncherError};
use std::io::{BufRead, Write};
use strictly_tictactoe::{GameInProgress, Marker, Position};

/// Something that can pick moves for one marker.
pub trait Player {
    /// Gets the next move for a game where it is this player's turn.
    ///
    /// The returned position is always empty on the game's board.
    fn get_move<R: BufRead, W: Write>(
        &mut self,
        game: &GameInProgress,
        console: &mut Console<R, W>,
    ) -> Result<Position, LauncherError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the marker this player places.
    fn marker(&self) -> Marker;
}
