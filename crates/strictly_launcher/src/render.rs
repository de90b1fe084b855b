//! Plain-text board rendering.

use strictly_tictactoe::Board;

const ROW_SEPARATOR: &str = "\n---+---+---\n";

/// Renders the board as three `X | O |  ` rows between separator lines,
/// padded with a blank line above and below.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .squares()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();

    format!("\n{}\n", rows.join(ROW_SEPARATOR))
}
