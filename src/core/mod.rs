//! Core domain types for the game
//!
//! The engine, key handling and tile scoring. Nothing here performs I/O.

mod game;
mod key;
mod tile;
mod word;

pub use game::{Cursor, GameEngine, GameState, Status};
pub use key::{BACKSPACE, Key};
pub use tile::{Tile, TileMatch, evaluate};
pub use word::{Word, WordError};

/// Letters per guess
pub const WORD_LENGTH: usize = 5;

/// Rows on the board
pub const MAX_GUESSES: usize = 6;
