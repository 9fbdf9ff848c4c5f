//! Interactive TUI interface

mod app;
pub mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, key_identifier, run_tui};
