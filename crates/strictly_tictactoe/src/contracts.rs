//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning: `{P} action {Q}`.

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::typestate::GameInProgress;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: it must be the marker's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.marker == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.marker))
        }
    }
}

/// Composite precondition: empty square and correct turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Pre: [`LegalMove`]. Post: every invariant in [`TicTacToeInvariants`].
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameResult, GameSetup, Marker, Position, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameSetup::new().start();
        let action = Move::new(Marker::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameSetup::new().start();
        let Ok(GameResult::InProgress(game)) =
            game.make_move(Move::new(Marker::X, Position::Center))
        else {
            panic!("First move should not finish the game");
        };

        let action = Move::new(Marker::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start();
        let action = Move::new(Marker::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Marker::O))
        );
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start();
        let Ok(GameResult::InProgress(mut after)) = game
            .clone()
            .make_move(Move::new(Marker::X, Position::Center))
        else {
            panic!("First move should not finish the game");
        };
        assert!(MoveContract::post(&game, &after).is_ok());

        after.board.set(Position::TopLeft, Square::Occupied(Marker::O));
        assert!(matches!(
            MoveContract::post(&game, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
