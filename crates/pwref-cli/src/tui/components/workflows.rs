use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use pwref_catalog::Catalog;
use pwref_types::{Protocol, Workflow};

use super::super::app::{AppState, CopyOutcome};
use super::{Component, protocol_color};

pub(crate) struct WorkflowsPane;

impl Component for WorkflowsPane {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog) {
        let now = Instant::now();
        let mut lines: Vec<Line> = Vec::new();
        let mut selected_line = 0;

        lines.push(Line::from(vec![
            Span::styled(
                "💼 Complete Workflow Examples",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", catalog.workflows.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "Real-world test scenarios showing how MCP, CLI, and Test Runner work together step-by-step.",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::raw(""));

        for (i, workflow) in catalog.workflows.iter().enumerate() {
            if i == state.workflow_cursor {
                selected_line = lines.len();
            }
            lines.push(card_header(workflow, state, i));
            lines.push(Line::from(Span::styled(
                format!("    {}", workflow.description),
                Style::default().fg(Color::DarkGray),
            )));

            if state.is_expanded(&workflow.id) {
                render_expanded(&mut lines, workflow, state, now);
            }
            lines.push(Line::raw(""));
        }

        // Keep the selected card in view without a separate scroll state.
        let scroll = (selected_line as u16).saturating_sub(3);
        let paragraph = Paragraph::new(Text::from(lines)).scroll((scroll, 0));
        f.render_widget(paragraph, area);
    }
}

fn card_header(workflow: &Workflow, state: &AppState, index: usize) -> Line<'static> {
    let expanded = state.is_expanded(&workflow.id);
    let marker = if expanded { "▼" } else { "▶" };
    let selected = index == state.workflow_cursor;

    let name_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(format!("{} ", marker), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{} {}", workflow.icon, workflow.name), name_style),
        Span::styled(
            format!("  [{}]", workflow.difficulty),
            Style::default().fg(Color::Magenta),
        ),
    ])
}

fn render_expanded(
    lines: &mut Vec<Line<'static>>,
    workflow: &Workflow,
    state: &AppState,
    now: Instant,
) {
    let active = state.active_tab(&workflow.id);
    let sample = workflow.sample(active);

    // Protocol tabs.
    let mut tab_spans = vec![Span::raw("    ")];
    for protocol in Protocol::all() {
        let style = if protocol == active {
            Style::default()
                .fg(Color::Black)
                .bg(protocol_color(protocol))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tab_spans.push(Span::styled(format!(" {} ", protocol.label()), style));
        tab_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(tab_spans));

    lines.push(Line::from(Span::styled(
        format!("    {}", sample.description),
        Style::default().fg(protocol_color(active)),
    )));

    // Code sample; comment lines are de-emphasized per the language tag.
    let comment_prefix = active.comment_prefix();
    for code_line in sample.code.lines() {
        let style = if code_line.trim_start().starts_with(comment_prefix) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("    {}", code_line),
            style,
        )));
    }

    // Copy hint and acknowledgment.
    let ack = match state.copy_ack(&workflow.id, now) {
        Some(CopyOutcome::Copied) => Span::styled(
            "✓ Copied!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Some(CopyOutcome::Failed) => Span::styled(
            "✗ Copy failed",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("📋 y to copy", Style::default().fg(Color::DarkGray)),
    };
    lines.push(Line::from(vec![Span::raw("    "), ack]));

    lines.push(Line::from(vec![
        Span::styled("    ✅ Expected Result: ", Style::default().fg(Color::Green)),
        Span::raw(workflow.expected_result.clone()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("    💡 Pro Tip: ", Style::default().fg(Color::Yellow)),
        Span::raw(workflow.pro_tip.clone()),
    ]));
}
