use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

use pwref_catalog::Catalog;
use pwref_engine::command_totals;

use crate::args::OutputFormat;
use crate::presentation::table;

#[derive(Serialize)]
struct StatsView {
    mcp: usize,
    cli: usize,
    test: usize,
    workflows: usize,
}

pub fn handle(catalog: &Catalog, format: &OutputFormat) -> Result<()> {
    let totals = command_totals(&catalog.categories);

    match format {
        OutputFormat::Json => {
            let view = StatsView {
                mcp: totals.mcp,
                cli: totals.cli,
                test: totals.test,
                workflows: catalog.workflows.len(),
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Plain => print!(
            "{}",
            table::render_stats(
                &totals,
                catalog.workflows.len(),
                std::io::stdout().is_terminal()
            )
        ),
    }

    Ok(())
}
