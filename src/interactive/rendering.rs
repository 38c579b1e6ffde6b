//! TUI rendering with ratatui
//!
//! Layout for playing against the judge.

use super::app::{App, InputMode, MessageStyle};
use crate::judge::GameState;
use crate::output::formatters::score_line;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const CANDIDATE_PREVIEW: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // History
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 ABSURDLE - The judge never commits")
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

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let style = if round.pattern.is_win() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} ", round.guess.text().to_uppercase()), style),
                Span::raw(app.style.render(&round.pattern)),
                Span::styled(
                    format!("  {} → {}", round.candidates_before, round.candidates_after),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let title = format!(" {} ", score_line(history.len(), app.game.config().max_rounds));
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Elimination gauge
            Constraint::Percentage(50), // Candidates
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_elimination(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_elimination(f: &mut Frame, app: &App, area: Rect) {
    let total = app.game.dictionary().len();
    let remaining = app.get_candidates_count();
    let eliminated = total.saturating_sub(remaining);
    let percent = if total == 0 {
        0
    } else {
        (eliminated * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{eliminated}/{total} | {remaining} remain"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.game.candidates();

    let mut content = if app.game.state() == GameState::Won {
        vec![Line::from("Game completed!")]
    } else if candidates.len() <= CANDIDATE_PREVIEW {
        candidates
            .iter()
            .map(|word| {
                Line::from(Span::styled(
                    format!("  {}", word.text().to_uppercase()),
                    Style::default().fg(Color::Green),
                ))
            })
            .collect()
    } else {
        vec![Line::from(format!(
            "{} words still possible",
            candidates.len()
        ))]
    };

    if let Some(hint) = &app.hint {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::raw("Hint: "),
            Span::styled(
                hint.word.to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" → {} ({} left)", hint.response, hint.remaining)),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let word_length = app.game.config().word_length;
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver if app.game.state() == GameState::Won => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::GameOver => (
            " Out of guesses | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Red,
        ),
        InputMode::Guessing => (
            format!(" Enter a {word_length}-letter guess | TAB for a hint "),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let record = match app.stats.best_rounds {
        Some(best) => format!(
            "Won {}/{} (best {best})",
            app.stats.games_won, app.stats.total_games
        ),
        None => format!("Won {}/{}", app.stats.games_won, app.stats.total_games),
    };
    let keys = match app.input_mode {
        InputMode::GameOver => "q quit · n new game",
        InputMode::Guessing => "Esc quit · Ctrl-N new game · Enter submit",
    };
    let separator = Span::styled("  │  ", Style::default().fg(Color::DarkGray));

    let status = Line::from(vec![
        Span::raw(format!("Round {}", app.game.rounds_played() + 1)),
        separator.clone(),
        Span::raw(record),
        separator.clone(),
        Span::styled(
            format!("{} candidates", app.get_candidates_count()),
            Style::default().fg(Color::Green),
        ),
        separator,
        Span::styled(keys, Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}
