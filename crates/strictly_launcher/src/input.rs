//! Validation of human move input.
//!
//! Nothing that fails here reaches the engine; the caller prints the
//! rejection and asks again.

use derive_more::Display;
use strictly_tictactoe::{Board, Position};
use tracing::instrument;

/// Why a typed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputRejection {
    /// Input is not a plain non-negative integer.
    #[display("Please enter a number between 1 and 9.")]
    NotANumber,
    /// Integer outside 1-9.
    #[display("Move must be between 1 and 9.")]
    OutOfRange,
    /// The square is taken.
    #[display("That spot is already taken. Try again.")]
    Taken,
}

/// Parses a 1-based move number typed by a human.
///
/// Leading and trailing whitespace is ignored. Only ASCII digits are
/// accepted, so signs and decimals count as not a number.
#[instrument(skip(board))]
pub fn parse_move(input: &str, board: &Board) -> Result<Position, InputRejection> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputRejection::NotANumber);
    }

    // Digit strings too long for usize are still just out of range.
    let position = input
        .parse::<usize>()
        .ok()
        .and_then(Position::from_menu_number)
        .ok_or(InputRejection::OutOfRange)?;

    if board.is_empty(position) {
        Ok(position)
    } else {
        Err(InputRejection::Taken)
    }
}
