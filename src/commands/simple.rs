//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: each line typed is split into keys and
//! fed to the engine, and the colored board is reprinted after every line.

use super::keys_for_entry;
use crate::config::GameConfig;
use crate::core::GameEngine;
use crate::output::{print_board, print_game_result};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Wordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════╝\n");

    println!("Type letters to fill the current row; a full row is submitted");
    println!("automatically. Use '<' (or the word 'Backspace') to delete.\n");
    println!("Commands: ':quit' to exit, ':new' for a new game\n");

    let mut rng = rand::rng();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut game = config.new_game(&mut rng);
    print_board(&game, config.show_answer);

    loop {
        let Some(line) = prompt(&mut lines, "Keys")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match line.as_str() {
            ":quit" | ":q" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => {
                game = config.new_game(&mut rng);
                println!("\n🔄 New game started!");
                print_board(&game, config.show_answer);
                continue;
            }
            _ => {}
        }

        feed_entry(&mut game, &line);
        print_board(&game, config.show_answer);

        if game.is_over() {
            print_game_result(&game);

            let again = prompt(&mut lines, "Play again? (yes/no)")?.unwrap_or_default();
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                game = config.new_game(&mut rng);
                println!("\n🔄 New game started!");
                print_board(&game, config.show_answer);
            } else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Deliver one line of input to the engine, key by key
pub fn feed_entry(game: &mut GameEngine, entry: &str) {
    for key in keys_for_entry(entry) {
        game.submit_key(&key);
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<String>> {
    print!("{}: ", label.bright_cyan());
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cursor, Status, Word};

    #[test]
    fn feed_entry_types_letters() {
        let mut game = GameEngine::new(Word::new("crane").unwrap());
        feed_entry(&mut game, "cr");
        assert_eq!(game.cursor(), Cursor::at(0, 2));

        feed_entry(&mut game, "ane");
        assert_eq!(game.status(), Status::Win);
    }

    #[test]
    fn feed_entry_spanning_rows() {
        let mut game = GameEngine::new(Word::new("crane").unwrap());
        feed_entry(&mut game, "stonecr");

        assert_eq!(game.guesses()[0], "STONE");
        assert_eq!(game.guesses()[1], "CR");
    }

    #[test]
    fn prompt_reads_until_eof() {
        let input = io::Cursor::new("  crane \n");
        let mut lines = input.lines();

        assert_eq!(prompt(&mut lines, "Keys").unwrap(), Some("crane".to_string()));
        assert_eq!(prompt(&mut lines, "Keys").unwrap(), None);
    }
}
