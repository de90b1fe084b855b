//! One interactive tic-tac-toe game between the human and the AI.

use crate::players::{HeuristicAi, HumanPlayer, Player};
use crate::render::render_board;
use crate::{Console, LauncherConfig, LauncherError};
use std::io::{BufRead, Write};
use strictly_tictactoe::{GameResult, GameSetup, Outcome};
use tracing::{info, instrument};

/// Plays a game to the end and returns its outcome.
///
/// X always moves first; whichever player holds X opens. The board is
/// rendered after every move.
///
/// # Errors
///
/// [`LauncherError::InputClosed`] if input ends mid-game, or an I/O error
/// from the console.
#[instrument(skip_all, fields(human = %config.human_marker()))]
pub fn run_tic_tac_toe<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &LauncherConfig,
) -> Result<Outcome, LauncherError> {
    let mut human = HumanPlayer::new("You", *config.human_marker());
    let mut ai = HeuristicAi::new("AI", config.ai_marker());

    console.say(format!(
        "You are {}. The AI is {}. Enter positions using numbers 1-9.",
        human.marker(),
        ai.marker()
    ))?;

    let mut game = GameSetup::new().start();
    console.say(render_board(game.board()))?;

    loop {
        let position = if game.to_move() == human.marker() {
            human.get_move(&game, console)?
        } else {
            ai.get_move(&game, console)?
        };

        let result = game.play(position)?;
        console.say(render_board(result.board()))?;

        match result {
            GameResult::InProgress(next) => game = next,
            GameResult::Finished(done) => {
                let outcome = *done.outcome();
                info!(%outcome, moves = done.history().len(), "Game finished");
                console.say(format!("{}\n", outcome))?;
                return Ok(outcome);
            }
        }
    }
}
