//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker, Position, Square};
use tracing::instrument;

/// Three positions that win the game when held by one marker.
pub type WinningLine = [Position; 3];

/// Every winning line: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the marker holding a complete winning line.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first full line
/// decides, so a board with several complete lines (unreachable in legal
/// play) still yields a deterministic answer.
#[instrument(level = "trace", skip(board))]
pub fn find_winner(board: &Board) -> Option<Marker> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        match (board.get(a), board.get(b), board.get(c)) {
            (Square::Occupied(p1), Square::Occupied(p2), Square::Occupied(p3))
                if p1 == p2 && p2 == p3 =>
            {
                Some(p1)
            }
            _ => None,
        }
    })
}
