use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use pwref_catalog::Catalog;
use pwref_engine::{ViewMode, compose};
use pwref_types::{Command, Protocol};

use crate::presentation::formatters::pad;

use super::super::app::{AppState, InputMode};
use super::{Component, category_color, protocol_color};

const ACTION_WIDTH: usize = 26;
const MCP_WIDTH: usize = 32;
const CLI_WIDTH: usize = 25;

pub(crate) struct CommandsPane;

impl Component for CommandsPane {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog) {
        let mut lines: Vec<Line> = Vec::new();

        lines.push(search_line(state));

        if state.search.is_empty() && state.view == ViewMode::ByCategory {
            lines.push(chips_line(state, catalog));
        }
        lines.push(Line::raw(""));

        let view = compose(
            &catalog.categories,
            state.view,
            state.active_category,
            &state.search,
        );

        if view.sections.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("No commands match \"{}\".", state.search),
                Style::default().fg(Color::DarkGray),
            )));
        }

        for section in &view.sections {
            if view.show_headings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} {}", section.icon, section.name),
                        Style::default()
                            .fg(category_color(section))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", section.commands.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            if view.show_tips && !section.tip.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("💡 Pro Tip: {}", section.tip),
                    Style::default().fg(Color::DarkGray),
                )));
            }

            lines.push(header_line());
            for command in &section.commands {
                lines.push(command_line(command));
            }
            lines.push(Line::raw(""));
        }

        let paragraph = Paragraph::new(Text::from(lines)).scroll((state.scroll, 0));
        f.render_widget(paragraph, area);
    }
}

fn search_line(state: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled("🔍 ", Style::default().fg(Color::Yellow))];
    if state.search.is_empty() && state.input_mode == InputMode::Normal {
        spans.push(Span::styled(
            "Search any command… (press /)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            state.search.clone(),
            Style::default().fg(Color::White),
        ));
    }
    if state.input_mode == InputMode::Search {
        spans.push(Span::styled("▌", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn chips_line(state: &AppState, catalog: &Catalog) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, category) in catalog.categories.iter().enumerate() {
        let label = format!(" {} {} ", category.icon, category.name);
        let style = if i == state.active_category {
            Style::default()
                .fg(Color::Black)
                .bg(category_color(category))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn header_line() -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            pad("ACTION", ACTION_WIDTH),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            pad(Protocol::Mcp.column(), MCP_WIDTH),
            Style::default().fg(protocol_color(Protocol::Mcp)),
        ),
        Span::styled(
            pad(Protocol::Cli.column(), CLI_WIDTH),
            Style::default().fg(protocol_color(Protocol::Cli)),
        ),
        Span::styled(
            Protocol::TestRunner.column().to_string(),
            Style::default().fg(protocol_color(Protocol::TestRunner)),
        ),
    ])
}

fn command_line(command: &Command) -> Line<'static> {
    let dot = if command.hot {
        Span::styled("● ", Style::default().fg(Color::Red))
    } else {
        Span::raw("  ")
    };

    let mut spans = vec![dot, Span::raw(pad(&command.action, ACTION_WIDTH))];
    for (protocol, width) in [
        (Protocol::Mcp, MCP_WIDTH),
        (Protocol::Cli, CLI_WIDTH),
        (Protocol::TestRunner, 24),
    ] {
        match command.invocation(protocol).text() {
            Some(text) => spans.push(Span::styled(
                pad(text, width),
                Style::default().fg(protocol_color(protocol)),
            )),
            None => spans.push(Span::styled(
                pad("—", width),
                Style::default().fg(Color::DarkGray),
            )),
        }
    }
    Line::from(spans)
}
