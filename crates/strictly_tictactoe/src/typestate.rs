//! Phase-specific typestate structs for a tic-tac-toe session.
//!
//! Each phase is its own type. A [`GameFinished`] always carries an
//! [`Outcome`] and has no move operation, so a finished game cannot
//! accept moves.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::phases::Outcome;
use crate::rules;
use crate::{Board, GameStatus, Marker, Position};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase, board always empty.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with X to move.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: Marker::X,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game awaiting a move from [`GameInProgress::to_move`].
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Marker,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next phase.
    ///
    /// Preconditions are always checked; postconditions only in debug
    /// builds.
    ///
    /// # Errors
    ///
    /// [`MoveError::SquareOccupied`] or [`MoveError::WrongPlayer`] if the
    /// move is illegal, [`MoveError::InvariantViolation`] if a debug-build
    /// postcondition fails.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.place(action.position, action.marker)?;
        game.history.push(action);

        if let Some(winner) = rules::find_winner(&game.board) {
            debug!(%winner, "Game won");
            return Ok(GameResult::Finished(game.finish(Outcome::Winner(winner))));
        }

        if rules::is_full(&game.board) {
            debug!("Game tied");
            return Ok(GameResult::Finished(game.finish(Outcome::Tie)));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Places the current marker at `position`.
    ///
    /// # Errors
    ///
    /// See [`GameInProgress::make_move`].
    pub fn play(self, position: Position) -> Result<GameResult, MoveError> {
        let action = Move::new(self.to_move, position);
        self.make_move(action)
    }

    /// Returns the marker to move.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions in ascending order.
    pub fn valid_moves(&self) -> Vec<Position> {
        rules::available_moves(&self.board)
    }

    /// Replays moves from a fresh game.
    ///
    /// Moves after the game finishes are ignored.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start();

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            board: self.board,
            history: self.history,
            outcome,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished with a known outcome.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Board after the move.
    pub fn board(&self) -> &Board {
        match self {
            GameResult::InProgress(g) => g.board(),
            GameResult::Finished(g) => g.board(),
        }
    }

    /// Status derived from the outcome.
    pub fn status(&self) -> GameStatus {
        match self {
            GameResult::InProgress(_) => GameStatus::InProgress,
            GameResult::Finished(g) => match g.outcome() {
                Outcome::Winner(marker) => GameStatus::Won(*marker),
                Outcome::Tie => GameStatus::Tie,
            },
        }
    }
}
