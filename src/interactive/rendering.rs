//! TUI rendering with ratatui
//!
//! One board per puzzle with an answer row, then hints, a keyboard colored by
//! what is known about each letter, messages and a status line.

use super::app::{App, InputMode, MessageStyle, answer_reveal, keyboard_status};
use crate::core::CharacterStatus;
use crate::puzzle::Puzzle;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Duration;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let rows = app
        .puzzles()
        .iter()
        .map(Puzzle::max_attempts)
        .max()
        .unwrap_or(0);
    let answer_rows = if app.puzzles().iter().any(|p| !p.is_secret_hidden()) {
        2
    } else {
        0
    };
    let hints_height = if app.config().hints { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length((rows + answer_rows + 2) as u16), // Boards
            Constraint::Length(hints_height), // Hints
            Constraint::Length(5), // Keyboard
            Constraint::Min(3), // Messages
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_boards(f, app, chunks[1]);
    if app.config().hints {
        render_hints(f, app, chunks[2]);
    }
    render_keyboard(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(status: CharacterStatus) -> Style {
    match status {
        CharacterStatus::CorrectLocation => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CharacterStatus::WrongLocation => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CharacterStatus::NotPresent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CharacterStatus::Unknown => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: char, status: CharacterStatus) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(status),
    )
}

fn blank_tile() -> Span<'static> {
    Span::styled(" · ", Style::default().fg(Color::DarkGray))
}

fn render_boards(f: &mut Frame, app: &App, area: Rect) {
    let count = app.puzzles().len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (idx, (puzzle, column)) in app.puzzles().iter().zip(columns.iter()).enumerate() {
        render_board(f, app, idx, puzzle, *column);
    }
}

fn render_board(f: &mut Frame, app: &App, idx: usize, puzzle: &Puzzle, area: Rect) {
    let length = app.config().word_length;
    let attempts = puzzle.attempts();
    let mut lines = Vec::with_capacity(puzzle.max_attempts() + 2);

    for row in 0..puzzle.max_attempts() {
        let spans: Vec<Span> = if let Some(attempt) = attempts.get(row) {
            attempt
                .letters()
                .map(|(_, letter, status)| tile(char::from(letter), status))
                .collect()
        } else if row == attempts.len() && !puzzle.is_over() {
            draft_tiles(app, idx, length)
        } else {
            (0..length).map(|_| blank_tile()).collect()
        };
        lines.push(Line::from(spans));
    }

    if let Some(reveal) = answer_reveal(puzzle) {
        lines.push(Line::from("─".repeat(length * 3)).style(Style::default().fg(Color::DarkGray)));
        lines.push(Line::from(
            reveal
                .into_iter()
                .map(|letter| match letter {
                    Some(letter) => tile(letter, CharacterStatus::CorrectLocation),
                    None => tile('?', CharacterStatus::Unknown),
                })
                .collect::<Vec<_>>(),
        ));
    }

    let receiving = app.input_mode() == InputMode::Status && app.status_index() == idx;
    let border = if receiving {
        Style::default().fg(Color::Yellow)
    } else if puzzle.is_solved() {
        Style::default().fg(Color::Green)
    } else if puzzle.is_over() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let title = if app.puzzles().len() > 1 {
        format!(" #{} ", idx + 1)
    } else {
        String::new()
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    );
    f.render_widget(board, area);
}

/// The guess being typed, with any statuses already entered for this board
fn draft_tiles(app: &App, idx: usize, length: usize) -> Vec<Span<'static>> {
    let result = app.result(idx);
    let mut letters = app.guess().chars();
    (0..length)
        .map(|pos| match letters.next() {
            Some(letter) => tile(
                letter,
                result.get(pos).copied().unwrap_or(CharacterStatus::Unknown),
            ),
            None => blank_tile(),
        })
        .collect()
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let text = if app.is_game_over() {
        "- game over -".to_string()
    } else if app.hints().is_empty() {
        "- no hints found -".to_string()
    } else {
        app.hints().join("  ")
    };

    let hints = Paragraph::new(text)
        .style(hint_style)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Hints ").borders(Borders::ALL));
    f.render_widget(hints, area);
}

/// The digit typed for `status`, colored like it
fn legend_tile(status: CharacterStatus) -> Span<'static> {
    tile(char::from(b'0' + status.code()), status)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.input_mode() == InputMode::Status {
        vec![
            Line::from(""),
            Line::from(vec![
                legend_tile(CharacterStatus::NotPresent),
                Span::raw(" absent   "),
                legend_tile(CharacterStatus::WrongLocation),
                Span::raw(" misplaced   "),
                legend_tile(CharacterStatus::CorrectLocation),
                Span::raw(" correct"),
            ]),
        ]
    } else {
        KEYBOARD_ROWS
            .iter()
            .map(|row| {
                Line::from(
                    row.chars()
                        .map(|letter| tile(letter, keyboard_status(app.puzzles(), letter)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    };

    let title = if app.input_mode() == InputMode::Status {
        " Result "
    } else {
        " Keyboard "
    };
    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages()
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
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    let timer = Paragraph::new(format_elapsed(app.elapsed()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(timer, chunks[0]);

    let help_text = if app.is_solving() {
        "esc/ctrl+c: quit"
    } else {
        "esc/ctrl+c: quit | ctrl+r: restart | tab/ctrl+d: attempts +/-"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

/// `mm:ss`, or `h:mm:ss` past the hour
fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, secs / 60 % 60, secs % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
