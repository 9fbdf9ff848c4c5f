//! Game state machine
//!
//! `GameEngine` owns the puzzle state and is the only thing allowed to change
//! it. Every key press produces a fresh `GameState` from the previous one via
//! [`GameState::apply`]; the engine then swaps the new value in.

use super::key::Key;
use super::tile::{Tile, evaluate};
use super::{MAX_GUESSES, WORD_LENGTH, Word};
use std::fmt;
use tracing::{debug, info};

/// Game outcome so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Win,
    Loss,
}

impl Status {
    /// Win or loss; no further input is accepted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "inProgress",
            Self::Win => "win",
            Self::Loss => "loss",
        })
    }
}

/// Position where the next keystroke lands
///
/// `col` is `None` once the game has ended, which locks the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub row: usize,
    pub col: Option<usize>,
}

impl Cursor {
    pub const START: Self = Self {
        row: 0,
        col: Some(0),
    };

    #[inline]
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col: Some(col) }
    }

    #[inline]
    #[must_use]
    pub const fn locked(row: usize) -> Self {
        Self { row, col: None }
    }

    #[inline]
    #[must_use]
    pub const fn is_locked(self) -> bool {
        self.col.is_none()
    }

    /// Column as a signed index, `-1` when locked
    #[inline]
    #[must_use]
    pub fn col_index(self) -> isize {
        self.col.map_or(-1, |col| col as isize)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col_index())
    }
}

/// Snapshot of a game: status, cursor and one string per grid row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub status: Status,
    pub cursor: Cursor,
    pub guesses: [String; MAX_GUESSES],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: Status::InProgress,
            cursor: Cursor::START,
            guesses: Default::default(),
        }
    }

    /// Compute the state that follows `key` without touching `self`
    ///
    /// Terminal states, ignored keys and backspace at the start of a row all
    /// yield an unchanged copy.
    #[must_use]
    pub fn apply(&self, key: Key, answer: &Word) -> Self {
        if self.status.is_terminal() {
            return self.clone();
        }
        let Some(col) = self.cursor.col else {
            return self.clone();
        };

        match key {
            Key::Ignored => self.clone(),
            Key::Backspace if col == 0 => self.clone(),
            Key::Backspace => {
                let mut next = self.clone();
                next.guesses[self.cursor.row].pop();
                next.cursor = Cursor::at(self.cursor.row, col - 1);
                next
            }
            Key::Letter(letter) => self.append(letter, col, answer),
        }
    }

    fn append(&self, letter: u8, col: usize, answer: &Word) -> Self {
        let row = self.cursor.row;
        let mut next = self.clone();
        next.guesses[row].push(char::from(letter));

        let complete = col + 1 == WORD_LENGTH;
        let solved = complete && answer.matches(&next.guesses[row]);
        let last_row = row == MAX_GUESSES - 1;

        if solved || (complete && last_row) {
            next.status = if solved { Status::Win } else { Status::Loss };
            next.cursor = Cursor::locked(row);
        } else if complete {
            next.cursor = Cursor::at(row + 1, 0);
        } else {
            next.cursor = Cursor::at(row, col + 1);
        }

        next
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "current={}, status={}, guesses={:?}",
            self.cursor, self.status, self.guesses
        )
    }
}

/// Sole owner of a game's state
#[derive(Debug, Clone)]
pub struct GameEngine {
    answer: Word,
    state: GameState,
}

impl GameEngine {
    /// Start a new game with a fixed answer
    #[must_use]
    pub fn new(answer: Word) -> Self {
        debug!("new game");
        Self {
            answer,
            state: GameState::new(),
        }
    }

    /// Feed one key identifier into the game
    ///
    /// Keys other than `"Backspace"` and single letters are ignored, as is
    /// everything once the game is over.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GameEngine, Status, Word};
    ///
    /// let mut game = GameEngine::new(Word::new("crane").unwrap());
    /// for key in ["c", "r", "a", "n", "e"] {
    ///     game.submit_key(key);
    /// }
    /// assert_eq!(game.status(), Status::Win);
    /// ```
    pub fn submit_key(&mut self, key: &str) {
        if self.state.status.is_terminal() {
            return;
        }

        let action = Key::parse(key);
        if action == Key::Ignored {
            return;
        }

        let next = self.state.apply(action, &self.answer);
        debug!(prev = %self.state, action = %action, next = %next, "game state update");

        if next.status.is_terminal() {
            info!(
                status = %next.status,
                guesses = next.cursor.row + 1,
                answer = %self.answer,
                "game over"
            );
        }

        self.state = next;
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.state.status
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.state.cursor
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.state.guesses
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.status.is_terminal()
    }

    /// Text of a row, or `None` if the cursor has not reached it yet
    #[must_use]
    pub fn row_guess(&self, row: usize) -> Option<&str> {
        if row <= self.state.cursor.row {
            self.state.guesses.get(row).map(String::as_str)
        } else {
            None
        }
    }

    /// Display tile for one grid cell
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        evaluate(
            &self.answer,
            row,
            col,
            self.state.cursor,
            self.row_guess(row),
        )
    }

    /// Display tiles for the whole grid
    #[must_use]
    pub fn board(&self) -> [[Tile; WORD_LENGTH]; MAX_GUESSES] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.tile(row, col)))
    }

    /// Number of rows that have been scored against the answer
    #[must_use]
    pub const fn rows_used(&self) -> usize {
        if self.state.cursor.is_locked() {
            self.state.cursor.row + 1
        } else {
            self.state.cursor.row
        }
    }
}
