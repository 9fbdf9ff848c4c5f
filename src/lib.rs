//! Wordle Game
//!
//! A Wordle game engine: a state machine fed one key at a time, and a pure
//! tile evaluator that says what each grid cell shows.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameEngine, Tile, Word};
//!
//! let mut game = GameEngine::new(Word::new("crane").unwrap());
//! for key in ["s", "t", "o", "n", "e"] {
//!     game.submit_key(key);
//! }
//!
//! assert_eq!(game.tile(0, 3), Tile::Present('N'));
//! assert_eq!(game.tile(0, 4), Tile::Correct('E'));
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
