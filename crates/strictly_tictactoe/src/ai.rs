//! One-ply heuristic opponent.
//!
//! The opponent looks exactly one move ahead: it takes a win when one is
//! on the board, blocks the opponent's immediate win, and otherwise falls
//! back to a fixed positional preference. It does not search, so a human
//! who sets up a fork (two simultaneous threats) beats it.

use crate::rules::{available_moves, find_winner};
use crate::{Board, Marker, Position};
use tracing::{debug, instrument};

/// Positional preference: center, then corners, then edges.
pub const PREFERENCE_ORDER: [Position; 9] = [
    Position::Center,
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
    Position::TopCenter,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
];

/// Finds a move that completes a line for `marker`.
///
/// Each available move is tried on a copy of the board in ascending index
/// order and the first one that makes `marker` the winner is returned.
#[instrument(level = "debug", skip(board))]
pub fn find_finishing_move(board: &Board, marker: Marker) -> Option<Position> {
    available_moves(board)
        .into_iter()
        .find(|&pos| find_winner(&board.with(pos, marker)) == Some(marker))
}

/// Picks the AI's next move.
///
/// Priority: win now, block the human's immediate win, first free square
/// in [`PREFERENCE_ORDER`], lowest free index. Returns `None` only when
/// the board is full.
#[instrument(skip(board))]
pub fn choose_ai_move(board: &Board, ai: Marker, human: Marker) -> Option<Position> {
    if let Some(pos) = find_finishing_move(board, ai) {
        debug!(position = ?pos, "Taking winning move");
        return Some(pos);
    }

    if let Some(pos) = find_finishing_move(board, human) {
        debug!(position = ?pos, "Blocking opponent");
        return Some(pos);
    }

    if let Some(pos) = PREFERENCE_ORDER.iter().copied().find(|&pos| board.is_empty(pos)) {
        debug!(position = ?pos, "Taking preferred square");
        return Some(pos);
    }

    available_moves(board).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &str) -> Board {
        let mut board = Board::new();
        for (idx, c) in cells.chars().enumerate() {
            match c {
                'X' => board.apply_move(idx, Marker::X).unwrap(),
                'O' => board.apply_move(idx, Marker::O).unwrap(),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_takes_center() {
        let board = Board::new();
        assert_eq!(choose_ai_move(&board, Marker::O, Marker::X), Some(Position::Center));
    }

    #[test]
    fn test_blocks_human_row() {
        let board = board_from("XX.O.....");
        assert_eq!(choose_ai_move(&board, Marker::O, Marker::X), Some(Position::TopRight));
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_from("OO.XX....");
        assert_eq!(choose_ai_move(&board, Marker::O, Marker::X), Some(Position::TopRight));
    }

    #[test]
    fn test_corner_after_center_taken() {
        let board = board_from("....X....");
        assert_eq!(choose_ai_move(&board, Marker::O, Marker::X), Some(Position::TopLeft));
    }

    #[test]
    fn test_lowest_finishing_index_wins_ties() {
        // O can finish at 2 (top row) or 6 (left column).
        let board = board_from("OO.O.X..X");
        assert_eq!(find_finishing_move(&board, Marker::O), Some(Position::TopRight));
    }

    #[test]
    fn test_no_finishing_move() {
        let board = board_from("X...O....");
        assert_eq!(find_finishing_move(&board, Marker::X), None);
        assert_eq!(find_finishing_move(&board, Marker::O), None);
    }

    #[test]
    fn test_finishing_move_leaves_board_untouched() {
        let board = board_from("XX.O.....");
        let before = board;
        let _ = find_finishing_move(&board, Marker::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_ai_move() {
        let board = board_from("XOXOXXOXO");
        assert_eq!(choose_ai_move(&board, Marker::O, Marker::X), None);
    }

    #[test]
    fn test_fork_is_not_anticipated() {
        // X holds opposite corners, O the center. One ply ahead there is
        // nothing to win or block, so O takes the next preferred corner
        // and walks into X's fork.
        let board = board_from("X...O...X");
        assert_eq!(choose_ai_move(&board, Marker::O, Marker::X), Some(Position::TopRight));
    }
}
