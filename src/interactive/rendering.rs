//! TUI rendering with ratatui
//!
//! The board is drawn from the session's share card, the same rows the share
//! text is built from.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Attribute, MatchKind};
use crate::game::{ATTRIBUTE_HINT_COST, BASE_SCORE, LETTER_HINT_COST, NameSlot};
use crate::output::formatters::{cell_text, name_mask};
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const CELL_WIDTH: usize = 16;

/// One board row: the guessed name and four colored cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub name: String,
    pub cells: [(String, MatchKind); 4],
}

/// Board rows in guess order
#[must_use]
pub fn board_rows<S: KeyValueStore>(app: &App<'_, S>) -> Vec<BoardRow> {
    let card = app.session.share_card();
    app.session
        .guesses()
        .iter()
        .zip(&card.rows)
        .map(|(guess, kinds)| BoardRow {
            name: guess.entity.name.clone(),
            cells: Attribute::ALL
                .map(|attr| (cell_text(guess.comparison.get(attr)), kinds[attr.index()])),
        })
        .collect()
}

const fn kind_style(kind: MatchKind) -> Style {
    match kind {
        MatchKind::Exact => Style::new().fg(Color::Black).bg(Color::Green),
        MatchKind::Close => Style::new().fg(Color::Black).bg(Color::Yellow),
        MatchKind::Wrong => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Left panel
            Constraint::Percentage(35), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let title = format!(
        "🐟 FISHDLE #{} · {}",
        app.session.game_index(),
        app.session.date()
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

fn render_main_panel<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Mystery fish
            Constraint::Min(5),    // Board
        ])
        .split(area);

    render_mystery(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
}

fn render_mystery<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let slots = app.session.name_slots();
    let all_shown = slots.iter().all(|s| !matches!(s, NameSlot::Hidden));

    let mut content = vec![Line::from(vec![
        Span::raw("Name: "),
        Span::styled(
            name_mask(&slots),
            Style::default()
                .fg(if all_shown { Color::Green } else { Color::Yellow })
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if app.session.is_over() {
        content.push(Line::from(Span::styled(
            app.session.target().scientific_name.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    for (attr, value) in app.session.revealed_attributes() {
        content.push(Line::from(vec![
            Span::styled(
                format!("{:<8}", attr.name()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(value.to_string()),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Mystery Fish ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_board<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let rows = board_rows(app);

    let mut lines = vec![Line::from(
        std::iter::once(Span::raw(format!("{:<22}", "")))
            .chain(Attribute::ALL.iter().map(|attr| {
                Span::styled(
                    format!("{:^CELL_WIDTH$} ", attr.name().to_uppercase()),
                    Style::default().fg(Color::Cyan),
                )
            }))
            .collect::<Vec<_>>(),
    )];

    // Newest guesses last; keep the most recent ones visible
    let visible = usize::from(area.height.saturating_sub(3));
    let skip = rows.len().saturating_sub(visible);
    for (i, row) in rows.iter().enumerate().skip(skip) {
        let mut spans = vec![Span::raw(format!("{:>2}. {:<18}", i + 1, row.name))];
        for (text, kind) in &row.cells {
            spans.push(Span::styled(
                format!("{text:^CELL_WIDTH$}"),
                kind_style(*kind),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "No guesses yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Guesses ({}) ", rows.len()))
            .borders(Borders::ALL),
    );
    f.render_widget(board, area);
}

fn render_info_panel<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Length(6), // Stats
            Constraint::Min(4),    // Suggestions or share text
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    if let Some(text) = &app.share_text {
        render_share(f, text, chunks[2]);
    } else {
        render_suggestions(f, app, chunks[2]);
    }
    render_messages(f, app, chunks[3]);
}

fn render_score<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let score = app.session.current_score();
    let percent = u16::try_from(score * 100 / BASE_SCORE).unwrap_or(100).min(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{score} / {BASE_SCORE}"));

    f.render_widget(gauge, area);
}

fn render_stats<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let stats = app.session.stats();
    let content = vec![
        Line::from(format!("Played:  {}", stats.games_played)),
        Line::from(format!("Win rate: {:.0}%", stats.win_rate())),
        Line::from(format!("Streak:  {}", stats.current_streak)),
        Line::from(format!("Best:    {}", stats.max_streak)),
    ];
    let paragraph =
        Paragraph::new(content).block(Block::default().title(" Stats ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_suggestions<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, fish)| {
            let style = if i == app.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(fish.name.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Suggestions (↑/↓, Tab) ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_share(f: &mut Frame, text: &str, area: Rect) {
    let paragraph = Paragraph::new(text.to_string())
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
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

fn render_input<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " 🎉 Solved! | 's' to share, 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Guess a fish | Enter: submit ",
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

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let guesses = Paragraph::new(format!("Guesses: {}", app.session.guesses().len()))
        .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let hints = app.session.hints();
    let hints_text = format!(
        "Hints: {}L {}A",
        hints.letters_revealed(),
        hints.attributes_revealed()
    );
    f.render_widget(
        Paragraph::new(hints_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "s: Share | q/Esc: Quit".to_string(),
        InputMode::Guessing => format!(
            "Ctrl-L: Letter (-{LETTER_HINT_COST}) | Ctrl-T: Attribute (-{ATTRIBUTE_HINT_COST}) | Esc: Quit"
        ),
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
