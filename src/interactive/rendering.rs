//! TUI rendering with ratatui
//!
//! Board, keyboard, and stats panels for the capital guessing game.

use super::app::{App, MessageStyle};
use crate::core::{ADJUSTED_ZOOM_LEVELS, Game, GameStatus, MAX_WRONG_GUESSES, text};
use crate::daily::GameMode;
use crate::output::formatters::{KEYBOARD_ROWS, miss_meter, spaced};
use crate::store::Store;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: Store>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Keyboard + stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = format!(
        "🌍 MAPITALS — {} — {} — {}",
        app.region, app.mode, app.date
    );
    let header = Paragraph::new(title)
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

fn render_board<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Masked words
            Constraint::Length(3), // Zoom gauge
        ])
        .split(area);

    render_words(f, app, chunks[0]);
    render_zoom(f, app, chunks[1]);
}

fn render_words<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let content = if let Some(game) = app.game.as_ref() {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                spaced(&game.masked_city()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                spaced(&game.masked_region_name()),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Misses: "),
                Span::styled(
                    miss_meter(game.wrong_guesses(), MAX_WRONG_GUESSES),
                    Style::default().fg(Color::Red),
                ),
            ]),
        ];

        match game.status() {
            GameStatus::Won => lines.push(Line::from(Span::styled(
                format!("🎉 Solved! +{} points", game.score()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))),
            GameStatus::Lost => lines.push(Line::from(Span::styled(
                format!("💀 It was {}", game.capital()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))),
            GameStatus::InProgress => {}
        }
        lines
    } else if let Some(share) = app.share_preview.as_ref() {
        let mut lines = vec![Line::from("")];
        lines.extend(share.lines().map(|l| Line::from(l.to_string())));
        lines
    } else {
        vec![Line::from(""), Line::from("No puzzle loaded")]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Capital ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_zoom<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let zoom = app.game.as_ref().map_or(ADJUSTED_ZOOM_LEVELS[0], Game::zoom_level);
    let min = ADJUSTED_ZOOM_LEVELS[0];
    let max = ADJUSTED_ZOOM_LEVELS[ADJUSTED_ZOOM_LEVELS.len() - 1];
    // Cast is safe: the ratio is clamped to [0, 100]
    let pct = (((zoom - min) / (max - min) * 100.0).clamp(0.0, 100.0)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Map Zoom ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(pct)
        .label(format!("zoom {zoom}"));

    f.render_widget(gauge, area);
}

fn render_side_panel<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Keyboard
            Constraint::Min(6),    // Stats
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
}

fn render_keyboard<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for key in row.chars() {
                let style = match app.game.as_ref() {
                    Some(game) if game.has_guessed(key) => {
                        if text::is_letter_in_text(key, &game.capital().full_text()) {
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::DarkGray)
                        }
                    }
                    _ => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(key.to_string(), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(keyboard, area);
}

fn render_stats<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let content = vec![
        Line::from(format!("Score:          {}", app.profile.score())),
        Line::from(format!("Games played:   {}", app.profile.games_played())),
        Line::from(format!("Current streak: {}", app.profile.current_streak())),
        Line::from(format!("Best streak:    {}", app.profile.best_streak())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
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

fn render_status<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let mode_text = match app.mode {
        GameMode::Daily => format!("Daily: {}", app.date),
        GameMode::Practice => "Practice".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let help = Paragraph::new(
        "A-Z: Guess | Enter: New Game | Tab: Region | F2: Mode | Ctrl+G: Give Up | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
