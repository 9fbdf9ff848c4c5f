//! Game configuration
//!
//! Collects where answers come from and the debug switches shared by every
//! front end.

use crate::core::{GameEngine, Word};
use crate::wordlists::loader::pick_random;
use rand::Rng;
use std::fmt;

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWordList,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list contains no valid 5-letter words"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for starting games
#[derive(Debug, Clone)]
pub struct GameConfig {
    answers: Vec<Word>,
    /// Use this answer for every game instead of drawing one
    pub fixed_answer: Option<Word>,
    /// Show the answer on screen (debugging aid)
    pub show_answer: bool,
}

impl GameConfig {
    /// Create a configuration drawing answers from `answers`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyWordList` if `answers` is empty.
    pub fn new(answers: Vec<Word>) -> Result<Self, ConfigError> {
        if answers.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        Ok(Self {
            answers,
            fixed_answer: None,
            show_answer: false,
        })
    }

    /// Pool a fresh answer is drawn from for each game
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn with_fixed_answer(mut self, answer: Option<Word>) -> Self {
        self.fixed_answer = answer;
        self
    }

    #[must_use]
    pub fn with_show_answer(mut self, show: bool) -> Self {
        self.show_answer = show;
        self
    }

    /// Answer for the next game
    #[must_use]
    pub fn choose_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        if let Some(answer) = &self.fixed_answer {
            return answer.clone();
        }

        // `new` guarantees a non-empty pool
        pick_random(&self.answers, rng)
            .cloned()
            .unwrap_or_else(|| self.answers[0].clone())
    }

    /// Start a fresh game with the next answer
    #[must_use]
    pub fn new_game<R: Rng + ?Sized>(&self, rng: &mut R) -> GameEngine {
        GameEngine::new(self.choose_answer(rng))
    }
}
