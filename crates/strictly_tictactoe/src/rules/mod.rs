//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Rules are kept
//! apart from board storage so the AI and the state machine can share them.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_full, is_tie};
pub use moves::available_moves;
pub use win::{find_winner, WinningLine, WINNING_LINES};
