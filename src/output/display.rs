//! Display functions for the line-based front ends

use super::formatters::share_grid;
use crate::core::{GameEngine, Status, Tile};
use colored::{ColoredString, Colorize};

fn colored_cell(tile: Tile) -> ColoredString {
    match tile {
        Tile::Pending => " · ".bright_black(),
        Tile::Entered(c) => format!(" {c} ").bright_white().bold(),
        Tile::Correct(c) => format!(" {c} ").black().on_green().bold(),
        Tile::Present(c) => format!(" {c} ").black().on_yellow().bold(),
        Tile::NoMatch(c) => format!(" {c} ").white().on_bright_black(),
    }
}

/// Print the board with colored tiles
pub fn print_board(game: &GameEngine, show_answer: bool) {
    println!("\n{}", "─".repeat(21).cyan());
    if show_answer {
        println!("  answer: {}", game.answer().text().bright_magenta());
    }

    for row in game.board() {
        print!("  ");
        for tile in row {
            print!("{} ", colored_cell(tile));
        }
        println!();
    }
    println!("{}", "─".repeat(21).cyan());
}

/// Print the outcome of a finished game
pub fn print_game_result(game: &GameEngine) {
    println!();
    match game.status() {
        Status::Win => {
            let guesses = game.rows_used();
            println!(
                "{}",
                format!(
                    "✅ Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        Status::Loss => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                game.answer().text().bright_yellow().bold()
            );
        }
        Status::InProgress => {
            println!("{}", "Game still in progress".yellow());
            return;
        }
    }

    println!("\n{}", share_grid(game));
}
