use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use pwref_catalog::Catalog;
use pwref_engine::command_totals;
use pwref_types::Protocol;

use super::app::{AppState, InputMode, Screen};
use super::components::{
    CommandsPane, ComparePane, Component, SetupPane, WorkflowsPane, protocol_color,
};

pub(crate) fn draw(f: &mut Frame, state: &AppState, catalog: &Catalog) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], catalog);
    render_screen_tabs(f, chunks[1], state);

    match state.screen {
        Screen::Commands => CommandsPane.render(f, chunks[2], state, catalog),
        Screen::Compare => ComparePane.render(f, chunks[2], state, catalog),
        Screen::Workflows => WorkflowsPane.render(f, chunks[2], state, catalog),
        Screen::Setup => SetupPane.render(f, chunks[2], state, catalog),
    }

    render_footer(f, chunks[3], state);
}

fn render_header(f: &mut Frame, area: Rect, catalog: &Catalog) {
    // Totals always reflect the full dataset, never the active filter.
    let totals = command_totals(&catalog.categories);

    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Playwright Commands",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " — MCP Tools · CLI Skills · Test Runner",
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut stats = Vec::new();
    for protocol in Protocol::all() {
        if !stats.is_empty() {
            stats.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
        }
        stats.push(Span::styled(
            format!("{} {}", totals.get(protocol), protocol.label()),
            Style::default().fg(protocol_color(protocol)),
        ));
        stats.push(Span::styled(
            format!("  {}", protocol.package()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    stats.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
    stats.push(Span::styled(
        format!("{} Workflows", catalog.workflows.len()),
        Style::default().fg(Color::Rgb(159, 18, 57)),
    ));

    let header = Paragraph::new(vec![title, Line::from(stats)]);
    f.render_widget(header, area);
}

fn render_screen_tabs(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    for (i, screen) in Screen::all().into_iter().enumerate() {
        let label = format!(" [{}] {} ", i + 1, screen.title());
        let style = if screen == state.screen {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let hints = match (state.input_mode, state.screen) {
        (InputMode::Search, _) => "type to filter · Enter keep · Esc clear",
        (_, Screen::Commands) => {
            "/ search · v view · ←/→ category · ↑/↓ scroll · 1-4 screens · q quit"
        }
        (_, Screen::Workflows) => {
            "↑/↓ select · Enter expand · Tab protocol · y copy · 1-4 screens · q quit"
        }
        _ => "↑/↓ scroll · 1-4 screens · q quit",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(footer, area);
}
