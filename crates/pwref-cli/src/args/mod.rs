// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - `workflow list` / `workflow show` group naturally; flat
//   `list-workflows` and `show-workflow` read worse in --help
// - Every data-producing command shares the global --format flag, so
//   scripting against JSON works uniformly across the surface

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pwref")]
#[command(about = "Compare Playwright MCP tools, CLI skills, and the test runner", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.pwref", global = true)]
    pub config_dir: String,

    #[arg(
        long,
        global = true,
        help = "Load an external catalog TOML instead of the built-in one"
    )]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
