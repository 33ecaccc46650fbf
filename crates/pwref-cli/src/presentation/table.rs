use owo_colors::OwoColorize;

use pwref_engine::{CommandTotals, ComposedView};
use pwref_types::{Category, ComparisonRow, Protocol, SetupCard, Verdict, Workflow};

use super::formatters::{hex_rgb, pad, protocol_rgb, truncate};

const ACTION_WIDTH: usize = 26;
const MCP_WIDTH: usize = 33;
const CLI_WIDTH: usize = 26;
const MIN_TEST_WIDTH: usize = 20;

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(120)
}

fn paint_rgb(text: &str, rgb: (u8, u8, u8), colored: bool) -> String {
    if colored {
        text.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        text.to_string()
    }
}

fn paint_dim(text: &str, colored: bool) -> String {
    if colored {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Render the composed command tables.
pub fn render_sections(view: &ComposedView, colored: bool) -> String {
    let test_width = terminal_width()
        .saturating_sub(2 + ACTION_WIDTH + MCP_WIDTH + CLI_WIDTH)
        .max(MIN_TEST_WIDTH);

    let mut out = String::new();
    for (i, section) in view.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if view.show_headings {
            out.push_str(&section_heading(section, colored));
            out.push('\n');
        }
        if view.show_tips && !section.tip.is_empty() {
            out.push_str(&paint_dim(&format!("💡 Pro Tip: {}", section.tip), colored));
            out.push('\n');
        }

        out.push_str("  ");
        out.push_str(&paint_dim(&pad("ACTION", ACTION_WIDTH), colored));
        out.push_str(&paint_rgb(
            &pad(Protocol::Mcp.column(), MCP_WIDTH),
            protocol_rgb(Protocol::Mcp),
            colored,
        ));
        out.push_str(&paint_rgb(
            &pad(Protocol::Cli.column(), CLI_WIDTH),
            protocol_rgb(Protocol::Cli),
            colored,
        ));
        out.push_str(&paint_rgb(
            Protocol::TestRunner.column(),
            protocol_rgb(Protocol::TestRunner),
            colored,
        ));
        out.push('\n');

        for command in &section.commands {
            let dot = if command.hot {
                if colored {
                    "●".red().to_string()
                } else {
                    "●".to_string()
                }
            } else {
                " ".to_string()
            };
            out.push_str(&dot);
            out.push(' ');
            out.push_str(&pad(&command.action, ACTION_WIDTH));
            out.push_str(&invocation_cell(command.invocation(Protocol::Mcp).text(), Protocol::Mcp, MCP_WIDTH, colored));
            out.push_str(&invocation_cell(command.invocation(Protocol::Cli).text(), Protocol::Cli, CLI_WIDTH, colored));
            out.push_str(&invocation_cell(
                command.invocation(Protocol::TestRunner).text(),
                Protocol::TestRunner,
                test_width,
                colored,
            ));
            out.push('\n');
        }
    }
    out
}

fn section_heading(section: &Category, colored: bool) -> String {
    let heading = format!("{} {} ({})", section.icon, section.name, section.commands.len());
    match hex_rgb(&section.color) {
        Some(rgb) if colored => heading.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string(),
        _ => heading,
    }
}

fn invocation_cell(text: Option<&str>, protocol: Protocol, width: usize, colored: bool) -> String {
    match text {
        Some(text) => paint_rgb(&pad(text, width), protocol_rgb(protocol), colored),
        None => paint_dim(&pad("—", width), colored),
    }
}

/// Render the header statistics (global totals, never filtered).
pub fn render_stats(totals: &CommandTotals, workflow_count: usize, colored: bool) -> String {
    let mut out = String::new();
    for protocol in Protocol::all() {
        out.push_str(&pad(protocol.label(), 14));
        out.push_str(&paint_rgb(
            &totals.get(protocol).to_string(),
            protocol_rgb(protocol),
            colored,
        ));
        out.push('\n');
    }
    out.push_str(&pad("Workflows", 14));
    out.push_str(&paint_rgb(&workflow_count.to_string(), (159, 18, 57), colored));
    out.push('\n');
    out
}

/// Render the MCP vs CLI head-to-head table.
pub fn render_comparison(rows: &[ComparisonRow], colored: bool) -> String {
    const ASPECT_WIDTH: usize = 20;
    const SIDE_WIDTH: usize = 50;

    let mut out = String::new();
    out.push_str(&paint_dim(&pad("ASPECT", ASPECT_WIDTH), colored));
    out.push_str(&paint_rgb(
        &pad("MCP Server", SIDE_WIDTH),
        protocol_rgb(Protocol::Mcp),
        colored,
    ));
    out.push_str(&paint_rgb(
        &pad("CLI Skills", SIDE_WIDTH),
        protocol_rgb(Protocol::Cli),
        colored,
    ));
    out.push_str(&paint_dim("EDGE", colored));
    out.push('\n');

    for row in rows {
        out.push_str(&pad(&row.aspect, ASPECT_WIDTH));
        out.push_str(&pad(&row.mcp, SIDE_WIDTH));
        out.push_str(&pad(&row.cli, SIDE_WIDTH));
        out.push_str(&verdict_badge(row.winner, colored));
        out.push('\n');
    }
    out
}

fn verdict_badge(verdict: Verdict, colored: bool) -> String {
    if !colored {
        return verdict.badge().to_string();
    }
    match verdict {
        Verdict::Mcp => verdict.badge().truecolor(79, 70, 229).bold().to_string(),
        Verdict::Cli => verdict.badge().truecolor(5, 150, 105).bold().to_string(),
        Verdict::Tie => verdict.badge().dimmed().to_string(),
    }
}

/// Render the quick-setup cards.
pub fn render_setup(cards: &[SetupCard], colored: bool) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let title = format!("{} {}", card.icon, card.title);
        out.push_str(&paint_rgb(&title, protocol_rgb(card.protocol), colored));
        out.push('\n');
        out.push_str("  $ ");
        out.push_str(&card.install);
        out.push('\n');
        out.push_str(&paint_dim(&format!("  {}", card.summary), colored));
        out.push('\n');
    }
    out
}

/// Render the workflow overview list.
pub fn render_workflow_list(workflows: &[Workflow], colored: bool) -> String {
    let mut out = String::new();
    for workflow in workflows {
        out.push_str(&pad(&workflow.id, 20));
        out.push_str(&pad(&format!("{} {}", workflow.icon, workflow.name), 34));
        out.push_str(&paint_dim(&pad(&workflow.difficulty.to_string(), 14), colored));
        out.push_str(&truncate(&workflow.description, 60));
        out.push('\n');
    }
    out
}

/// Render one workflow with a single protocol's code sample.
pub fn render_workflow_detail(workflow: &Workflow, protocol: Protocol, colored: bool) -> String {
    let sample = workflow.sample(protocol);
    let rule = "─".repeat(60);

    let mut out = String::new();
    out.push_str(&format!(
        "{} {} ({})\n",
        workflow.icon, workflow.name, workflow.difficulty
    ));
    out.push_str(&paint_dim(&workflow.description, colored));
    out.push('\n');
    out.push('\n');
    out.push_str(&paint_rgb(
        &format!("{} — {}", protocol.label(), sample.description),
        protocol_rgb(protocol),
        colored,
    ));
    out.push('\n');
    out.push_str(&paint_dim(&rule, colored));
    out.push('\n');
    for line in sample.code.lines() {
        if line.trim_start().starts_with(protocol.comment_prefix()) {
            out.push_str(&paint_dim(line, colored));
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out.push_str(&paint_dim(&rule, colored));
    out.push('\n');
    out.push_str(&format!("✅ Expected Result: {}\n", workflow.expected_result));
    out.push_str(&format!("💡 Pro Tip: {}\n", workflow.pro_tip));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwref_engine::{ViewMode, compose};

    #[test]
    fn sections_render_placeholder_for_not_applicable() {
        let catalog = pwref_catalog::Catalog::builtin();
        let view = compose(&catalog.categories, ViewMode::ByCategory, 0, "");
        let rendered = render_sections(&view, false);

        assert!(rendered.contains("Open / Navigate URL"));
        assert!(rendered.contains("browser_navigate"));
        // "Reload Page" has no MCP equivalent.
        assert!(rendered.contains("—"));
        // Single-category mode renders no section heading.
        assert!(!rendered.contains("Navigation (5)"));
    }

    #[test]
    fn headings_carry_match_counts_in_all_view() {
        let catalog = pwref_catalog::Catalog::builtin();
        let view = compose(&catalog.categories, ViewMode::All, 0, "");
        let rendered = render_sections(&view, false);

        assert!(rendered.contains("Navigation (5)"));
        assert!(rendered.contains("Interactions (9)"));
    }

    #[test]
    fn search_suppresses_tips() {
        let catalog = pwref_catalog::Catalog::builtin();
        let view = compose(&catalog.categories, ViewMode::ByCategory, 0, "click");
        let rendered = render_sections(&view, false);

        assert!(!rendered.contains("Pro Tip"));
    }

    #[test]
    fn workflow_detail_includes_code_verbatim() {
        let catalog = pwref_catalog::Catalog::builtin();
        let workflow = catalog.workflow("login-auth").unwrap();
        let rendered = render_workflow_detail(workflow, Protocol::Cli, false);

        assert!(rendered.contains("playwright open https://example.com/login"));
        assert!(rendered.contains("Expected Result"));
    }
}
