//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{BACKSPACE, GameEngine, MAX_GUESSES, Status};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub config: &'a GameConfig,
    pub game: GameEngine,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: ThreadRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses (index 0 unused)
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, game: &GameEngine) {
        self.total_games += 1;
        if game.status() == Status::Win {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(game.rows_used()) {
                *slot += 1;
            }
        }
    }
}

/// Map a terminal key event to the identifier the engine understands
///
/// Only presses of plain characters and backspace are forwarded; chords with
/// Ctrl or Alt are swallowed so shortcuts never type letters.
#[must_use]
pub fn key_identifier(key: &KeyEvent) -> Option<String> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Backspace => Some(BACKSPACE.to_string()),
        _ => None,
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(config: &'a GameConfig) -> Self {
        let mut rng = rand::rng();
        let game = config.new_game(&mut rng);

        Self {
            config,
            game,
            messages: vec![Message {
                text: "Guess the word! Type letters; a full row submits itself.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    /// Forward a key to the engine and react if it ended the game
    pub fn submit_key(&mut self, key: &str) {
        let was_over = self.game.is_over();
        self.game.submit_key(key);

        if !was_over && self.game.is_over() {
            self.stats.record(&self.game);

            match self.game.status() {
                Status::Win => {
                    let celebration = match self.game.rows_used() {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it in six! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                }
                Status::Loss => {
                    let text = format!("Out of guesses! The word was {}", self.game.answer());
                    self.add_message(&text, MessageStyle::Error);
                }
                Status::InProgress => {}
            }
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    /// Handle one terminal key event
    pub fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.game.is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        if let Some(id) = key_identifier(key) {
            self.submit_key(&id);
        }
    }

    pub fn new_game(&mut self) {
        self.game = self.config.new_game(&mut self.rng);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(&key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
