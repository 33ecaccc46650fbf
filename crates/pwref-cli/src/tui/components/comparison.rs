use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use pwref_catalog::Catalog;
use pwref_types::{Protocol, Verdict};

use crate::presentation::formatters::pad;

use super::super::app::AppState;
use super::{Component, protocol_color};

const ASPECT_WIDTH: usize = 20;
const SIDE_WIDTH: usize = 50;

pub(crate) struct ComparePane;

impl Component for ComparePane {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog) {
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "MCP vs CLI — Head-to-Head Comparison",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));

        lines.push(Line::from(vec![
            Span::styled(pad("ASPECT", ASPECT_WIDTH), Style::default().fg(Color::DarkGray)),
            Span::styled(
                pad("MCP Server", SIDE_WIDTH),
                Style::default().fg(protocol_color(Protocol::Mcp)),
            ),
            Span::styled(
                pad("CLI Skills", SIDE_WIDTH),
                Style::default().fg(protocol_color(Protocol::Cli)),
            ),
            Span::styled("EDGE", Style::default().fg(Color::DarkGray)),
        ]));

        for row in &catalog.comparisons {
            let badge = match row.winner {
                Verdict::Mcp => Span::styled(
                    row.winner.badge(),
                    Style::default()
                        .fg(protocol_color(Protocol::Mcp))
                        .add_modifier(Modifier::BOLD),
                ),
                Verdict::Cli => Span::styled(
                    row.winner.badge(),
                    Style::default()
                        .fg(protocol_color(Protocol::Cli))
                        .add_modifier(Modifier::BOLD),
                ),
                Verdict::Tie => {
                    Span::styled(row.winner.badge(), Style::default().fg(Color::DarkGray))
                }
            };

            lines.push(Line::from(vec![
                Span::styled(
                    pad(&row.aspect, ASPECT_WIDTH),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(pad(&row.mcp, SIDE_WIDTH)),
                Span::raw(pad(&row.cli, SIDE_WIDTH)),
                badge,
            ]));
        }

        let paragraph = Paragraph::new(Text::from(lines)).scroll((state.scroll, 0));
        f.render_widget(paragraph, area);
    }
}
