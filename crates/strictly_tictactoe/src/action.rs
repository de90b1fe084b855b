//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated before they touch the board.

use crate::{Marker, Position};
use serde::{Deserialize, Serialize};

/// A move: a marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker being placed.
    pub marker: Marker,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, position: Position) -> Self {
        Self { marker, position }
    }

    /// Returns the marker of this move.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// A move the engine refused.
///
/// Every variant is a contract violation by the caller. The input layer
/// filters human input before it reaches the engine, so these never
/// represent recoverable game conditions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Board index outside 0-8.
    #[display("Position index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// It's not this marker's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Marker),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::OutOfRange(12).to_string(),
            "Position index 12 is out of range (must be 0-8)"
        );
        assert_eq!(MoveError::WrongPlayer(Marker::O).to_string(), "It's not O's turn");
    }

    #[test]
    fn test_move_display() {
        let mov = Move::new(Marker::X, Position::BottomLeft);
        assert_eq!(mov.to_string(), "X -> Bottom-left");
    }
}
