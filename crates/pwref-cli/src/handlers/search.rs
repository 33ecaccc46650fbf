use anyhow::Result;
use is_terminal::IsTerminal;

use pwref_catalog::Catalog;
use pwref_engine::{ViewMode, compose};

use crate::args::OutputFormat;
use crate::presentation::table;

pub fn handle(catalog: &Catalog, query: &str, format: &OutputFormat) -> Result<()> {
    // Search overrides any grouping; an empty query is the identity and
    // falls through to the full listing.
    let view = compose(&catalog.categories, ViewMode::All, 0, query);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view.sections)?),
        OutputFormat::Plain => {
            if view.sections.is_empty() {
                println!("No commands match \"{}\".", query);
            } else {
                print!(
                    "{}",
                    table::render_sections(&view, std::io::stdout().is_terminal())
                );
            }
        }
    }

    Ok(())
}
