//! Structured logging setup
//!
//! The engine emits a `debug!` event for every state transition and an
//! `info!` event when a game ends. The filter comes from `RUST_LOG` when set,
//! otherwise from the level passed in.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Logging disabled (TUI without a log file: stderr would corrupt the screen)
    Off,
}

/// Build the filter for a default level, letting `RUST_LOG` override it
#[must_use]
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Subscriber writing plain (uncolored) lines to `file`
pub fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(Mutex::new(file)),
    )
}

/// Initialize the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global subscriber
/// is already installed.
pub fn init(target: LogTarget<'_>, default_level: &str) -> Result<()> {
    match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter(default_level))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            file_subscriber(file, filter(default_level)).try_init()?;
        }
    }

    tracing::debug!("logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_target_installs_nothing() {
        assert!(init(LogTarget::Off, "debug").is_ok());
    }

    #[test]
    fn file_subscriber_writes_plain_debug_lines() {
        let path = std::env::temp_dir().join(format!(
            "wordle_game_log_{}.txt",
            std::process::id()
        ));
        let file = File::create(&path).unwrap();
        let subscriber = file_subscriber(file, EnvFilter::new("debug"));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(row = 2, "typed into board");
            tracing::trace!("below the filter");
        });

        let logged = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(logged.contains("DEBUG"));
        assert!(logged.contains("typed into board"));
        assert!(logged.contains("row=2"));
        assert!(!logged.contains("below the filter"));
        assert!(!logged.contains('\u{1b}'));
    }
}
