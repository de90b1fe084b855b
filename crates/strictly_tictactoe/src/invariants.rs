//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every in-progress
//! game. They are checked after each move in debug builds and can be
//! tested on their own.

use crate::{GameInProgress, Marker, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ];

        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has placed the same number of markers as O, or one more.
pub struct MarkerBalanceInvariant;

impl Invariant<GameInProgress> for MarkerBalanceInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let x = game.board().count(Marker::X);
        let o = game.board().count(Marker::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Invariant: every history entry is on the board and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        let filled = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        filled == game.history().len()
            && game
                .history()
                .iter()
                .all(|mov| board.get(mov.position) == Square::Occupied(mov.marker))
    }

    fn description() -> &'static str {
        "Move history matches the board"
    }
}

/// Invariant: markers alternate X, O, X, ... and `to_move` follows suit.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(idx, mov)| mov.marker == if idx % 2 == 0 { Marker::X } else { Marker::O });

        let expected_next = if history.len() % 2 == 0 {
            Marker::X
        } else {
            Marker::O
        };

        alternates && game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Markers alternate turns (X, O, X, O, ...)"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MarkerBalanceInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);
