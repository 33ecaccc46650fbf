use anyhow::Result;
use is_terminal::IsTerminal;

use pwref_catalog::Catalog;

use crate::config::Config;

pub fn handle(catalog: &Catalog, config: &Config) -> Result<()> {
    crate::tui::run(catalog, config)
}

/// Bare `pwref` opens the interactive reference when attached to a
/// terminal; otherwise (piped, CI) it prints guidance instead of trying
/// to take over a screen that is not there.
pub fn handle_default(catalog: &Catalog, config: &Config) -> Result<()> {
    if std::io::stdout().is_terminal() {
        return crate::tui::run(catalog, config);
    }

    show_guidance();
    Ok(())
}

fn show_guidance() {
    println!("pwref — compare Playwright MCP tools, CLI skills, and the test runner");
    println!();
    println!("Common commands:");
    println!("  pwref tui                          Open the interactive reference");
    println!("  pwref list --category navigation   Show one category's command table");
    println!("  pwref search click                 Find commands across categories");
    println!("  pwref stats                        Per-protocol command totals");
    println!("  pwref compare                      MCP vs CLI head-to-head");
    println!("  pwref workflow list                Complete workflow examples");
    println!();
    println!("Run 'pwref --help' for the full surface.");
}
