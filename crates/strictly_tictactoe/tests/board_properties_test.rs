//! Property tests over arbitrary board snapshots and legal games.

use proptest::prelude::*;
use strictly_tictactoe::{
    available_moves, choose_ai_move, find_finishing_move, find_winner, Board, GameResult,
    GameSetup, GameStatus, InvariantSet, Marker, Position, Square, TicTacToeInvariants,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Marker::X)),
        Just(Square::Occupied(Marker::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn marker() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::X), Just(Marker::O)]
}

proptest! {
    #[test]
    fn available_moves_is_complement_of_occupied(board in board()) {
        let moves = available_moves(&board);
        let occupied = board.squares().iter().filter(|s| **s != Square::Empty).count();

        prop_assert_eq!(moves.len(), 9 - occupied);
        prop_assert!(moves.windows(2).all(|w| w[0] < w[1]));
        for pos in Position::ALL {
            prop_assert_eq!(moves.contains(&pos), board.is_empty(pos));
        }
    }

    #[test]
    fn find_winner_is_idempotent(board in board()) {
        prop_assert_eq!(find_winner(&board), find_winner(&board));
    }

    #[test]
    fn find_finishing_move_does_not_mutate(board in board(), marker in marker()) {
        let before = board;
        let found = find_finishing_move(&board, marker);
        prop_assert_eq!(board, before);

        if let Some(pos) = found {
            let mut trial = board;
            trial.place(pos, marker).unwrap();
            prop_assert_eq!(find_winner(&trial), Some(marker));
        }
    }

    #[test]
    fn choose_ai_move_is_deterministic_and_legal(board in board(), ai in marker()) {
        let first = choose_ai_move(&board, ai, ai.opponent());
        let second = choose_ai_move(&board, ai, ai.opponent());
        prop_assert_eq!(first, second);

        match first {
            Some(pos) => prop_assert!(board.is_empty(pos)),
            None => prop_assert!(board.is_full()),
        }
    }

    #[test]
    fn legal_games_keep_invariants(order in Just(Position::ALL.to_vec()).prop_shuffle()) {
        let mut game = GameSetup::new().start();

        for pos in order {
            prop_assert!(TicTacToeInvariants::check_all(&game).is_ok());
            match game.play(pos).unwrap() {
                GameResult::InProgress(next) => {
                    prop_assert_eq!(next.board().status(), GameStatus::InProgress);
                    game = next;
                }
                GameResult::Finished(done) => {
                    let status = done.board().status();
                    prop_assert!(status.is_terminal());
                    prop_assert_eq!(done.outcome().winner(), find_winner(done.board()));
                    return Ok(());
                }
            }
        }

        prop_assert!(false, "nine legal moves must finish the game");
    }
}
