//! Key identifier classification
//!
//! Input sources hand the engine raw key identifiers (`"a"`, `"Backspace"`,
//! `"Shift"`, ...). Only backspace and single ASCII letters are meaningful.

/// Identifier the input source uses for the backspace key
pub const BACKSPACE: &str = "Backspace";

/// A classified key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    /// An uppercase ASCII letter
    Letter(u8),
    Ignored,
}

impl Key {
    /// Classify a raw key identifier
    ///
    /// A letter must be the whole identifier: `"ab"` or `"F1"` are ignored
    /// rather than split or truncated.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Key;
    ///
    /// assert_eq!(Key::parse("q"), Key::Letter(b'Q'));
    /// assert_eq!(Key::parse("Backspace"), Key::Backspace);
    /// assert_eq!(Key::parse("ab"), Key::Ignored);
    /// ```
    #[must_use]
    pub fn parse(key: &str) -> Self {
        if key == BACKSPACE {
            return Self::Backspace;
        }

        match key.as_bytes() {
            [b] if b.is_ascii_alphabetic() => Self::Letter(b.to_ascii_uppercase()),
            _ => Self::Ignored,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backspace => f.write_str(BACKSPACE),
            Self::Letter(b) => write!(f, "{}", char::from(*b)),
            Self::Ignored => f.write_str("<ignored>"),
        }
    }
}
