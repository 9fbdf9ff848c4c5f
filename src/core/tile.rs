//! Per-cell feedback derivation
//!
//! Scoring is per-cell: a guessed letter is `Present` if it
//! occurs anywhere in the answer, with no accounting for how many times. A
//! guess of `EERIE` against `CRANE` marks every non-exact `E` as present.

use super::game::Cursor;
use super::Word;

/// Match category of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileMatch {
    Pending,
    Entered,
    Correct,
    Present,
    NoMatch,
}

/// What a single grid cell shows
///
/// Every category except `Pending` carries the letter typed into the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Pending,
    Entered(char),
    Correct(char),
    Present(char),
    NoMatch(char),
}

impl Tile {
    #[must_use]
    pub const fn kind(self) -> TileMatch {
        match self {
            Self::Pending => TileMatch::Pending,
            Self::Entered(_) => TileMatch::Entered,
            Self::Correct(_) => TileMatch::Correct,
            Self::Present(_) => TileMatch::Present,
            Self::NoMatch(_) => TileMatch::NoMatch,
        }
    }

    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Pending => None,
            Self::Entered(c) | Self::Correct(c) | Self::Present(c) | Self::NoMatch(c) => Some(c),
        }
    }
}

/// Derive the tile for cell (`row`, `col`)
///
/// `guess` is the row's text, or `None` if the cursor has not reached the row.
/// Rows above the cursor are finalized and scored; so is the cursor row once
/// the game has ended. On the row being typed, cells left of the cursor column
/// show their letter unscored and the rest are pending.
///
/// # Examples
/// ```
/// use wordle_game::core::{Cursor, Tile, Word, evaluate};
///
/// let answer = Word::new("crane").unwrap();
/// let cursor = Cursor::at(1, 0);
/// assert_eq!(evaluate(&answer, 0, 3, cursor, Some("STONE")), Tile::Present('N'));
/// assert_eq!(evaluate(&answer, 2, 0, cursor, None), Tile::Pending);
/// ```
#[must_use]
pub fn evaluate(answer: &Word, row: usize, col: usize, cursor: Cursor, guess: Option<&str>) -> Tile {
    let Some(guess) = guess else {
        return Tile::Pending;
    };
    let Some(letter) = guess.as_bytes().get(col).copied() else {
        return Tile::Pending;
    };

    let finalized = row < cursor.row || (row == cursor.row && cursor.is_locked());
    if !finalized {
        // Active row: only cells left of the cursor have been typed
        return match cursor.col {
            Some(typed) if col < typed => Tile::Entered(char::from(letter)),
            _ => Tile::Pending,
        };
    }

    let ch = char::from(letter);
    if answer.chars().get(col) == Some(&letter) {
        Tile::Correct(ch)
    } else if answer.has_letter(letter) {
        Tile::Present(ch)
    } else {
        Tile::NoMatch(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crane() -> Word {
        Word::new("crane").unwrap()
    }

    #[test]
    fn unreached_row_is_pending() {
        let tile = evaluate(&crane(), 3, 0, Cursor::at(1, 2), None);
        assert_eq!(tile, Tile::Pending);
        assert_eq!(tile.letter(), None);
    }

    #[test]
    fn finalized_row_categories() {
        let cursor = Cursor::at(1, 0);
        let answer = crane();
        let tiles: Vec<Tile> = (0..5)
            .map(|col| evaluate(&answer, 0, col, cursor, Some("STONE")))
            .collect();

        assert_eq!(
            tiles,
            vec![
                Tile::NoMatch('S'),
                Tile::NoMatch('T'),
                Tile::NoMatch('O'),
                Tile::Present('N'),
                Tile::Correct('E'),
            ]
        );
    }

    #[test]
    fn active_row_shows_typed_letters_unscored() {
        let cursor = Cursor::at(2, 2);
        let answer = crane();

        assert_eq!(evaluate(&answer, 2, 0, cursor, Some("CR")), Tile::Entered('C'));
        assert_eq!(evaluate(&answer, 2, 1, cursor, Some("CR")), Tile::Entered('R'));
        assert_eq!(evaluate(&answer, 2, 2, cursor, Some("CR")), Tile::Pending);
        assert_eq!(evaluate(&answer, 2, 4, cursor, Some("CR")), Tile::Pending);
    }

    #[test]
    fn locked_cursor_row_is_scored() {
        let cursor = Cursor::locked(0);
        let answer = crane();
        for (col, ch) in "CRANE".chars().enumerate() {
            assert_eq!(evaluate(&answer, 0, col, cursor, Some("CRANE")), Tile::Correct(ch));
        }
    }

    #[test]
    fn locked_losing_row_is_scored() {
        let cursor = Cursor::locked(5);
        let tile = evaluate(&crane(), 5, 0, cursor, Some("NACRE"));
        assert_eq!(tile, Tile::Present('N'));
    }

    // Repeated guess letters are each judged on their own, so one E in the
    // answer lights up every misplaced E in the guess.
    #[test]
    fn duplicate_letters_are_not_deduplicated() {
        let cursor = Cursor::at(1, 0);
        let answer = crane();
        let tiles: Vec<Tile> = (0..5)
            .map(|col| evaluate(&answer, 0, col, cursor, Some("EERIE")))
            .collect();

        assert_eq!(
            tiles,
            vec![
                Tile::Present('E'),
                Tile::Present('E'),
                Tile::Present('R'),
                Tile::NoMatch('I'),
                Tile::Correct('E'),
            ]
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let cursor = Cursor::at(1, 0);
        let answer = crane();
        let first = evaluate(&answer, 0, 2, cursor, Some("TRAIN"));
        let second = evaluate(&answer, 0, 2, cursor, Some("TRAIN"));
        assert_eq!(first, second);
        assert_eq!(first, Tile::Correct('A'));
    }

    #[test]
    fn kind_and_letter_accessors() {
        assert_eq!(Tile::Pending.kind(), TileMatch::Pending);
        assert_eq!(Tile::Entered('A').kind(), TileMatch::Entered);
        assert_eq!(Tile::Present('B').letter(), Some('B'));
        assert_eq!(Tile::NoMatch('C').kind(), TileMatch::NoMatch);
    }
}
