//! TUI rendering with ratatui
//!
//! Draws the letter grid from the engine's tiles, plus statistics and
//! messages.

use super::app::{App, MessageStyle};
use crate::core::{MAX_GUESSES, Status, Tile, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(20),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "WORDLE",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if app.config.show_answer {
        spans.push(Span::styled(
            format!("  (answer: {})", app.game.answer()),
            Style::default().fg(Color::Magenta),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TILE_HEIGHT); MAX_GUESSES])
        .flex(Flex::Center)
        .split(inner);

    let board = app.game.board();
    for (row_area, tiles) in rows.iter().zip(board.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(TILE_WIDTH); WORD_LENGTH])
            .flex(Flex::Center)
            .split(*row_area);

        for (cell_area, &tile) in cells.iter().zip(tiles.iter()) {
            render_tile(f, tile, *cell_area);
        }
    }
}

fn tile_style(tile: Tile) -> (Style, Style) {
    // (cell style, border style)
    match tile {
        Tile::Pending => (
            Style::default(),
            Style::default().fg(Color::DarkGray),
        ),
        Tile::Entered(_) => (
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        ),
        Tile::Correct(_) => (
            Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Green),
        ),
        Tile::Present(_) => (
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        ),
        Tile::NoMatch(_) => (
            Style::default().bg(Color::DarkGray).fg(Color::White),
            Style::default().fg(Color::DarkGray),
        ),
    }
}

fn render_tile(f: &mut Frame, tile: Tile, area: Rect) {
    let (style, border_style) = tile_style(tile);
    let letter = tile.letter().map(String::from).unwrap_or_default();

    let paragraph = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Statistics
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![
        Line::from(format!("Played:   {}", stats.total_games)),
        Line::from(format!("Win rate: {:.0}%", stats.win_rate())),
        Line::from(""),
    ];

    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar_len = count * 12 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let status_text = match app.game.status() {
        Status::InProgress => format!("Guess {}/{MAX_GUESSES}", app.game.cursor().row + 1),
        Status::Win => "Solved!".to_string(),
        Status::Loss => "Game over".to_string(),
    };
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let cursor_text = format!("Cursor: {}", app.game.cursor());
    let cursor = Paragraph::new(cursor_text).alignment(Alignment::Center);
    f.render_widget(cursor, chunks[1]);

    let help_text = if app.game.is_over() {
        "n: New Game | q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
