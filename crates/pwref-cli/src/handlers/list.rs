use anyhow::{Result, bail};
use is_terminal::IsTerminal;

use pwref_catalog::Catalog;
use pwref_engine::{ViewMode, compose};

use crate::args::OutputFormat;
use crate::presentation::table;

pub fn handle(
    catalog: &Catalog,
    category: Option<&str>,
    query: Option<&str>,
    default_view: ViewMode,
    format: &OutputFormat,
) -> Result<()> {
    let query = query.unwrap_or("");

    let (view_mode, active_category) = match category {
        Some(name) => match catalog.category_index(name) {
            Some(index) => (ViewMode::ByCategory, index),
            None => {
                let names: Vec<_> = catalog
                    .categories
                    .iter()
                    .map(|category| category.name.as_str())
                    .collect();
                bail!("unknown category: {} (expected one of: {})", name, names.join(", "));
            }
        },
        None => (default_view, 0),
    };

    let view = compose(&catalog.categories, view_mode, active_category, query);

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
