//! Scripted play command
//!
//! Feeds a fixed sequence of entries into a game with a known answer, for
//! demonstrating and checking feedback without an interactive terminal.

use super::keys_for_entry;
use crate::core::{GameEngine, Status, Word};
use crate::output::{board_to_text, share_grid};

/// Result of replaying a script
pub struct ReplayResult {
    pub game: GameEngine,
    /// Keys delivered to the engine
    pub keys_sent: usize,
    /// Entries left unprocessed because the game ended first
    pub entries_unused: usize,
}

impl ReplayResult {
    #[must_use]
    pub const fn status(&self) -> Status {
        self.game.status()
    }

    /// Uncolored report: the board as text, then the outcome
    ///
    /// Used when output is piped or `--plain` is given.
    #[must_use]
    pub fn render_plain(&self, show_answer: bool) -> String {
        let mut report = String::new();
        if show_answer {
            report.push_str(&format!("answer: {}\n", self.game.answer()));
        }
        report.push_str(&board_to_text(&self.game));
        report.push_str(&format!("\nstatus: {}, cursor: {}", self.status(), self.game.cursor()));

        if self.game.is_over() {
            report.push_str("\n\n");
            report.push_str(&share_grid(&self.game));
        }
        report
    }
}

/// Replay `entries` against `answer`
///
/// Each entry is expanded with [`keys_for_entry`]. Replaying stops at the
/// first entry that starts after the game has ended.
///
/// # Examples
/// ```
/// use wordle_game::commands::run_replay;
/// use wordle_game::core::{Status, Word};
///
/// let result = run_replay(Word::new("crane").unwrap(), &["stone", "crane", "extra"]);
/// assert_eq!(result.status(), Status::Win);
/// assert_eq!(result.entries_unused, 1);
/// ```
#[must_use]
pub fn run_replay<S: AsRef<str>>(answer: Word, entries: &[S]) -> ReplayResult {
    let mut game = GameEngine::new(answer);
    let mut keys_sent = 0;
    let mut entries_used = 0;

    for entry in entries {
        if game.is_over() {
            break;
        }
        entries_used += 1;

        for key in keys_for_entry(entry.as_ref()) {
            game.submit_key(&key);
            keys_sent += 1;
        }
    }

    tracing::debug!(
        keys_sent,
        status = %game.status(),
        cursor = %game.cursor(),
        "replay finished"
    );

    ReplayResult {
        game,
        keys_sent,
        entries_unused: entries.len() - entries_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cursor, Tile};

    fn crane() -> Word {
        Word::new("crane").unwrap()
    }

    #[test]
    fn replay_in_progress_game() {
        let result = run_replay(crane(), &["stone", "cr"]);

        assert_eq!(result.status(), Status::InProgress);
        assert_eq!(result.game.cursor(), Cursor::at(1, 2));
        assert_eq!(result.keys_sent, 7);
        assert_eq!(result.entries_unused, 0);
        assert_eq!(result.game.tile(0, 3), Tile::Present('N'));
    }

    #[test]
    fn replay_with_backspace_markers() {
        let result = run_replay(crane(), &["crx<ane"]);
        assert_eq!(result.status(), Status::Win);
        assert_eq!(result.game.guesses()[0], "CRANE");
    }

    #[test]
    fn replay_stops_after_loss() {
        let entries = vec!["stone"; 8];
        let result = run_replay(crane(), &entries);

        assert_eq!(result.status(), Status::Loss);
        assert_eq!(result.entries_unused, 2);
    }

    #[test]
    fn plain_report_in_progress() {
        let result = run_replay(crane(), &["stone", "ca"]);
        let report = result.render_plain(false);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], " S  T  O (N)[E]");
        assert_eq!(lines[1], "<C><A> .  .  . ");
        assert_eq!(lines[6], "status: inProgress, cursor: [1, 2]");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn plain_report_finished_game() {
        let result = run_replay(crane(), &["crane"]);
        let report = result.render_plain(true);

        assert!(report.starts_with("answer: CRANE\n[C][R][A][N][E]\n"));
        assert!(report.contains("status: win, cursor: [0, -1]"));
        assert!(report.ends_with("Wordle 1/6\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn replay_empty_script() {
        let result = run_replay::<&str>(crane(), &[]);
        assert_eq!(result.status(), Status::InProgress);
        assert_eq!(result.keys_sent, 0);
    }
}
