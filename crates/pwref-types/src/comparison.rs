use serde::{Deserialize, Serialize};

/// Which side a head-to-head row favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Mcp,
    Cli,
    Tie,
}

impl Verdict {
    /// Badge text in the "Edge" column.
    pub fn badge(&self) -> &'static str {
        match self {
            Verdict::Mcp => "MCP",
            Verdict::Cli => "CLI",
            Verdict::Tie => "Tie",
        }
    }
}

/// One aspect of the MCP-vs-CLI head-to-head table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub aspect: String,
    pub mcp: String,
    pub cli: String,
    pub winner: Verdict,
}
