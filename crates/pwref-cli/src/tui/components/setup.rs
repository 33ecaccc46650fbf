use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use pwref_catalog::Catalog;

use super::super::app::AppState;
use super::{Component, protocol_color};

pub(crate) struct SetupPane;

impl Component for SetupPane {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog) {
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "⚙️ Quick Setup",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));

        for card in &catalog.setup {
            lines.push(Line::from(Span::styled(
                format!("{} {}", card.icon, card.title),
                Style::default()
                    .fg(protocol_color(card.protocol))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled("  $ ", Style::default().fg(Color::DarkGray)),
                Span::styled(card.install.clone(), Style::default().fg(Color::White)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", card.summary),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::raw(""));
        }

        let paragraph = Paragraph::new(Text::from(lines)).scroll((state.scroll, 0));
        f.render_widget(paragraph, area);
    }
}
