//! Pure tic-tac-toe game logic.
//!
//! The engine holds a 3x3 [`Board`], derives the [`GameStatus`] from it on
//! demand, and picks moves for a one-ply heuristic opponent with
//! [`choose_ai_move`]. A session runs through the typestate phases
//! [`GameSetup`] → [`GameInProgress`] → [`GameFinished`].
//!
//! ```
//! use strictly_tictactoe::{choose_ai_move, Board, Marker, Position};
//!
//! let board = Board::new();
//! assert_eq!(choose_ai_move(&board, Marker::O, Marker::X), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod contracts;
mod invariants;
mod phases;
mod position;
pub mod rules;
mod typestate;
mod types;

pub use action::{Move, MoveError};
pub use ai::{choose_ai_move, find_finishing_move, PREFERENCE_ORDER};
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MarkerBalanceInvariant, TicTacToeInvariants,
};
pub use phases::Outcome;
pub use position::Position;
pub use rules::{available_moves, find_winner, WinningLine, WINNING_LINES};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use types::{Board, GameStatus, Marker, Square};
