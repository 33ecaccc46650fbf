use std::path::{Path, PathBuf};

use anyhow::Result;

use pwref_catalog::Catalog;

use crate::args::{Cli, Commands, WorkflowCommand};
use crate::config::Config;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config_dir = expand_tilde(&cli.config_dir);
    let config = Config::load_from(&config_dir.join("config.toml"))?;

    let catalog_path = cli.catalog.as_deref().or(config.catalog.as_deref());
    let catalog = resolve_catalog(catalog_path)?;

    let Some(command) = cli.command else {
        return handlers::tui::handle_default(&catalog, &config);
    };

    match command {
        Commands::List { category, query } => handlers::list::handle(
            &catalog,
            category.as_deref(),
            query.as_deref(),
            config.default_view,
            &cli.format,
        ),

        Commands::Search { query } => handlers::search::handle(&catalog, &query, &cli.format),

        Commands::Stats => handlers::stats::handle(&catalog, &cli.format),

        Commands::Compare => handlers::compare::handle(&catalog, &cli.format),

        Commands::Setup => handlers::setup::handle(&catalog, &cli.format),

        Commands::Workflow { command } => match command {
            WorkflowCommand::List => handlers::workflow::handle_list(&catalog, &cli.format),
            WorkflowCommand::Show { id, protocol, copy } => handlers::workflow::handle_show(
                &catalog,
                &id,
                protocol.map(Into::into).unwrap_or(config.default_protocol),
                copy,
                &cli.format,
            ),
        },

        Commands::Tui => handlers::tui::handle(&catalog, &config),
    }
}

fn resolve_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from(path),
        None => Ok(Catalog::builtin().clone()),
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
