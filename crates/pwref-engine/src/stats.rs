use serde::{Deserialize, Serialize};

use pwref_types::{Category, Protocol};

/// Global per-protocol command totals.
///
/// Always computed over the full dataset: the header stats never change
/// while a search narrows the tables below them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTotals {
    pub mcp: usize,
    pub cli: usize,
    pub test: usize,
}

impl CommandTotals {
    pub fn get(&self, protocol: Protocol) -> usize {
        match protocol {
            Protocol::Mcp => self.mcp,
            Protocol::Cli => self.cli,
            Protocol::TestRunner => self.test,
        }
    }
}

/// Count, per protocol, the commands that have an equivalent under it.
pub fn command_totals(categories: &[Category]) -> CommandTotals {
    CommandTotals {
        mcp: total_for(categories, Protocol::Mcp),
        cli: total_for(categories, Protocol::Cli),
        test: total_for(categories, Protocol::TestRunner),
    }
}

fn total_for(categories: &[Category], protocol: Protocol) -> usize {
    categories
        .iter()
        .map(|category| category.available_count(protocol))
        .sum()
}
