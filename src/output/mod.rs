//! Terminal output formatting
//!
//! Display utilities for the line-based front ends and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_result};
pub use formatters::{board_to_text, share_grid, tile_to_emoji};
