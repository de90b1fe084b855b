//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

impl std::str::FromStr for Marker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Marker::X),
            "O" | "o" => Ok(Marker::O),
            other => Err(format!("Unknown marker '{}' (expected X or O)", other)),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a marker.
    Occupied(Marker),
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(marker) => write!(f, "{}", marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine squares in row-major order.
    ///
    /// No balance check is made, so any snapshot can be analysed.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(marker))
            .count()
    }

    /// Overwrites a square without any checks.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places `marker` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] and leaves the board untouched
    /// if the square already holds a marker.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(marker));
        Ok(())
    }

    /// Places `marker` at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an index past 8 and
    /// [`MoveError::SquareOccupied`] for a taken square. The board is
    /// unchanged in both cases.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, marker: Marker) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.place(pos, marker)
    }

    /// Returns a copy of the board with `marker` placed at `pos`.
    pub(crate) fn with(&self, pos: Position, marker: Marker) -> Self {
        let mut trial = *self;
        trial.set(pos, Square::Occupied(marker));
        trial
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the winning marker, if any.
    pub fn winner(&self) -> Option<Marker> {
        rules::find_winner(self)
    }

    /// Derives the game status from the board.
    pub fn status(&self) -> GameStatus {
        if let Some(marker) = self.winner() {
            GameStatus::Won(marker)
        } else if self.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::InProgress
        }
    }
}

/// Status of a game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A marker completed a winning line.
    Won(Marker),
    /// Board is full with no winner.
    Tie,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.apply_move(4, Marker::X).unwrap();
        let before = board;

        let result = board.apply_move(4, Marker::O);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(9, Marker::X), Err(MoveError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_status_progression() {
        let mut board = Board::new();
        assert_eq!(board.status(), GameStatus::InProgress);

        for idx in [0, 1, 2] {
            board.apply_move(idx, Marker::O).unwrap();
        }
        assert_eq!(board.status(), GameStatus::Won(Marker::O));
        assert!(board.status().is_terminal());
    }

    #[test]
    fn test_marker_parsing() {
        assert_eq!("x".parse::<Marker>(), Ok(Marker::X));
        assert_eq!(" O ".parse::<Marker>(), Ok(Marker::O));
        assert!("Z".parse::<Marker>().is_err());
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::Empty.to_string(), " ");
        assert_eq!(Square::Occupied(Marker::X).to_string(), "X");
    }
}
