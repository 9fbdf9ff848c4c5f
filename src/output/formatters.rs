//! Formatting utilities for terminal output

use crate::core::{GameEngine, MAX_GUESSES, Status, Tile};

/// Emoji square for a scored tile
///
/// Unscored tiles (pending or entered) render as a blank square.
#[must_use]
pub const fn tile_to_emoji(tile: Tile) -> char {
    match tile {
        Tile::Correct(_) => '🟩',
        Tile::Present(_) => '🟨',
        Tile::NoMatch(_) | Tile::Entered(_) | Tile::Pending => '⬜',
    }
}

/// Shareable summary of a game: a score line plus one emoji row per used guess
///
/// # Examples
/// ```
/// use wordle_game::core::{GameEngine, Word};
/// use wordle_game::output::share_grid;
///
/// let mut game = GameEngine::new(Word::new("crane").unwrap());
/// for key in ["c", "r", "a", "n", "e"] {
///     game.submit_key(key);
/// }
/// assert_eq!(share_grid(&game), "Wordle 1/6\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(game: &GameEngine) -> String {
    let score = match game.status() {
        Status::Win => game.rows_used().to_string(),
        Status::Loss | Status::InProgress => "X".to_string(),
    };

    let rows = game
        .board()
        .iter()
        .take(game.rows_used())
        .map(|row| row.iter().map(|&tile| tile_to_emoji(tile)).collect::<String>())
        .collect::<Vec<_>>();

    let mut result = format!("Wordle {score}/{MAX_GUESSES}");
    for row in rows {
        result.push('\n');
        result.push_str(&row);
    }
    result
}

/// Plain-text board, one line per row
///
/// Each cell is three characters: `[A]` correct, `(A)` present, ` A ` no
/// match, `<A>` entered, ` . ` pending.
#[must_use]
pub fn board_to_text(game: &GameEngine) -> String {
    game.board()
        .iter()
        .map(|row| row.iter().map(|&tile| cell_text(tile)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_text(tile: Tile) -> String {
    match tile {
        Tile::Pending => " . ".to_string(),
        Tile::Entered(c) => format!("<{c}>"),
        Tile::Correct(c) => format!("[{c}]"),
        Tile::Present(c) => format!("({c})"),
        Tile::NoMatch(c) => format!(" {c} "),
    }
}
