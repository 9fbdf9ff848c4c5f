//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{ReplayResult, run_replay};
pub use simple::run_simple;

use crate::core::BACKSPACE;

/// Split one line of typed input into key identifiers
///
/// The whole entry `"Backspace"` is a single backspace; otherwise every
/// character becomes its own key, with `<` standing in for backspace.
/// Characters the engine does not accept are passed through and ignored there.
///
/// # Examples
/// ```
/// use wordle_game::commands::keys_for_entry;
///
/// assert_eq!(keys_for_entry("ab<"), vec!["a", "b", "Backspace"]);
/// assert_eq!(keys_for_entry("Backspace"), vec!["Backspace"]);
/// ```
#[must_use]
pub fn keys_for_entry(entry: &str) -> Vec<String> {
    if entry == BACKSPACE {
        return vec![BACKSPACE.to_string()];
    }

    entry
        .chars()
        .map(|ch| match ch {
            '<' => BACKSPACE.to_string(),
            other => other.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_splits_into_single_keys() {
        assert_eq!(keys_for_entry("crane"), vec!["c", "r", "a", "n", "e"]);
    }

    #[test]
    fn entry_maps_backspace_markers() {
        assert_eq!(keys_for_entry("a<<"), vec!["a", "Backspace", "Backspace"]);
        assert_eq!(keys_for_entry("Backspace"), vec!["Backspace"]);
    }

    #[test]
    fn empty_entry_has_no_keys() {
        assert!(keys_for_entry("").is_empty());
    }
}
