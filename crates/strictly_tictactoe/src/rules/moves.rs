//! Legal move enumeration.

use crate::{Board, Position};
use tracing::instrument;

/// Returns the empty positions in ascending index order.
///
/// Empty when the board is full.
#[instrument(level = "trace", skip(board))]
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}
