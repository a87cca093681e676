//! TUI rendering with ratatui
//!
//! Word slots, the open menu and game progress.

use super::app::{App, InputMode, MessageStyle};
use crate::interaction::MenuTarget;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word and menu
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD HOP - One letter at a time")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),      // Current word
            Constraint::Percentage(60), // Menu
            Constraint::Min(3),         // Trail
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_menu(f, app, chunks[1]);
    render_trail(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let word = app.current();
    let open = app.state.interaction().open_menu();
    let cursor = app.cursor_target();

    let mut spans = Vec::with_capacity(app.slot_count());
    for slot in 0..app.slot_count() {
        let target = if slot % 2 == 0 {
            MenuTarget::Position(slot / 2)
        } else {
            MenuTarget::Letter(slot / 2)
        };
        let (text, editable) = match target {
            MenuTarget::Position(j) => {
                let can = word.position(j).is_some_and(|p| p.can_insert());
                (if can { "+" } else { "·" }.to_string(), can)
            }
            MenuTarget::Letter(i) => {
                let letter = word.letter(i);
                let can = letter.is_some_and(|l| l.can_delete() || l.can_replace());
                let text = letter.map(|l| l.value().to_string()).unwrap_or_default();
                (text, can)
            }
        };

        let mut style = match (target, editable) {
            (MenuTarget::Letter(_), true) => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            (MenuTarget::Letter(_), false) => Style::default().fg(Color::Gray),
            (MenuTarget::Position(_), true) => Style::default().fg(Color::Green),
            (MenuTarget::Position(_), false) => Style::default().fg(Color::DarkGray),
        };
        if open == Some(target) {
            style = style.bg(Color::Yellow).fg(Color::Black);
        } else if cursor == target {
            style = style.bg(Color::Blue);
        }

        spans.push(Span::styled(format!(" {text} "), style));
    }

    let game = app.state.game();
    let goal = match (game.target, game.par) {
        (Some(target), Some(par)) => format!("Target: {}  (best: {par} edits)", target.value()),
        (Some(target), None) => format!("Target: {}  (no known ladder)", target.value()),
        (None, _) => "Free play".to_string(),
    };

    let content = vec![
        Line::from(""),
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled(goal, Style::default().fg(Color::Yellow))),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Current Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.state.interaction().open_menu() {
        Some(MenuTarget::Letter(i)) => format!(" Letter {} ", i + 1),
        Some(MenuTarget::Position(j)) => format!(" Insert as letter {} ", j + 1),
        None => " Menu ".to_string(),
    };

    let items: Vec<ListItem> = app
        .menu_items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.selection {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(item.label()).style(style)
        })
        .collect();

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Green));

    if items.is_empty() {
        let hint = Paragraph::new("Press Enter on a letter or gap to see its edits").block(block);
        f.render_widget(hint, area);
    } else {
        f.render_widget(List::new(items).block(block), area);
    }
}

fn render_trail(f: &mut Frame, app: &App, area: Rect) {
    let trail = app.state.trail();
    let items: Vec<ListItem> = trail
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, word)| ListItem::new(format!("{}: {}", trail.len() - i, word.value())))
        .collect();

    let list = List::new(items).block(Block::default().title(" Trail ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Progress gauge
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let par = app.state.game().par;
    let remaining = app.state.distance_to_target();
    let moves = app.state.moves();

    let (percent, label) = match (par, remaining) {
        (Some(par), Some(remaining)) if par > 0 => {
            let done = par.saturating_sub(remaining);
            (
                (done * 100 / par).min(100) as u16,
                format!("{remaining} edits to go | {moves} made | best {par}"),
            )
        }
        (Some(_), Some(_)) => (100, format!("{moves} edits made")),
        _ => (0, format!("{moves} edits made")),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Playing if app.is_menu_open() => "Mode: Choosing",
        InputMode::Playing => "Mode: Playing",
        InputMode::WinCelebration => "Mode: 🎉 Won",
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Won: {} | Perfect: {}",
        app.stats.total_games, app.stats.games_won, app.stats.perfect_games
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::WinCelebration => "q: Quit | n: New Game",
        InputMode::Playing if app.is_menu_open() => {
            "↑/↓: Select | Enter: Apply | letter: Choose | -: Delete | Esc: Close"
        }
        InputMode::Playing => "←/→: Move | Enter: Open | u: Undo | h: Hint | s: Say | n: New | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
