use anyhow::Result;
use is_terminal::IsTerminal;

use pwref_catalog::Catalog;

use crate::args::OutputFormat;
use crate::presentation::table;

pub fn handle(catalog: &Catalog, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog.comparisons)?)
        }
        OutputFormat::Plain => print!(
            "{}",
            table::render_comparison(&catalog.comparisons, std::io::stdout().is_terminal())
        ),
    }

    Ok(())
}
