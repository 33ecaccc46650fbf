// NOTE: pwref Architecture Rationale
//
// Why an embedded catalog (not scraped docs)?
// - The three Playwright surfaces (MCP tools, CLI skills, test runner)
//   drift independently; a curated snapshot keeps the comparison honest
// - One TOML document doubles as the schema for team-maintained catalogs
//   loaded via --catalog
// - Trade-off: updates ship with releases, but every table stays coherent
//
// Why tagged Invocation (not an em-dash placeholder string)?
// - "no equivalent" is data, not text; a real command can never collide
//   with the placeholder
// - Search and totals skip NotApplicable fields without string comparisons
//
// Why reducer-style TUI state?
// - Every key event maps to one named AppState transition, so the whole
//   interactive surface (single-expansion, tab persistence, copy
//   acknowledgment decay) is unit-testable without a terminal

mod args;
mod commands;
pub mod clipboard;
pub mod config;
mod handlers;
pub mod presentation;
mod tui;

pub use args::{Cli, Commands, OutputFormat, ProtocolArg, WorkflowCommand};
pub use commands::run;
