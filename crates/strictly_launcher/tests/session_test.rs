//! Scripted games through the interactive session.

use std::io::Cursor;
use strictly_launcher::{run_tic_tac_toe, Console, LauncherConfig, LauncherError};
use strictly_tictactoe::{Marker, Outcome};

/// Plays a game from scripted input lines and returns the outcome and
/// everything written to the console.
fn play(lines: &[&str], config: &LauncherConfig) -> (Result<Outcome, LauncherError>, String) {
    let input = lines.iter().map(|l| format!("{l}\n")).collect::<String>();
    let mut console = Console::new(Cursor::new(input), Vec::new());
    let result = run_tic_tac_toe(&mut console, config);
    let (_, output) = console.into_parts();
    (result, String::from_utf8(output).expect("utf8 output"))
}

#[test]
fn test_ai_wins_when_human_ignores_threat() {
    let (result, output) = play(&["1", "2", "9"], &LauncherConfig::default());

    assert_eq!(result.unwrap(), Outcome::Winner(Marker::O));
    assert!(output.starts_with("You are X. The AI is O. Enter positions using numbers 1-9.\n"));
    assert!(output.contains("AI chooses position 5."));
    assert!(output.contains("AI chooses position 3."));
    assert!(output.contains("AI chooses position 7."));
    assert!(output.ends_with("O wins!\n\n"));
}

#[test]
fn test_defended_game_ends_in_tie() {
    let (result, output) = play(&["1", "2", "7", "6", "8"], &LauncherConfig::default());

    assert_eq!(result.unwrap(), Outcome::Tie);
    let announcements: Vec<_> = output
        .lines()
        .filter(|l| l.starts_with("AI chooses position"))
        .collect();
    assert_eq!(
        announcements,
        [
            "AI chooses position 5.",
            "AI chooses position 3.",
            "AI chooses position 4.",
            "AI chooses position 9.",
        ]
    );
    assert!(output.contains("\nX | X | O\n---+---+---\nO | O | X\n---+---+---\nX | X | O\n"));
    assert!(output.ends_with("It's a tie!\n\n"));
}

#[test]
fn test_invalid_input_is_reprompted() {
    let (result, output) = play(
        &["abc", "10", "1", "5", "1", "2", "9"],
        &LauncherConfig::default(),
    );

    assert_eq!(result.unwrap(), Outcome::Winner(Marker::O));
    assert!(output.contains("Please enter a number between 1 and 9.\n"));
    assert!(output.contains("Move must be between 1 and 9.\n"));
    assert_eq!(output.matches("That spot is already taken. Try again.\n").count(), 2);
    assert_eq!(output.matches("Choose your move (1-9): ").count(), 7);
}

#[test]
fn test_ai_opens_when_human_plays_o() {
    let config = LauncherConfig::default().with_human_marker(Marker::O);
    let (result, output) = play(&[], &config);

    assert!(matches!(result, Err(LauncherError::InputClosed)));
    assert!(output.starts_with("You are O. The AI is X."));
    assert!(output.contains("AI chooses position 5.\n\n  |   |  \n---+---+---\n  | X |  \n"));
}

#[test]
fn test_end_of_input_mid_game() {
    let (result, output) = play(&["1"], &LauncherConfig::default());

    assert!(matches!(result, Err(LauncherError::InputClosed)));
    assert!(output.ends_with("Choose your move (1-9): "));
}
