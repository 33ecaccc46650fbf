use std::fmt;

use serde::{Deserialize, Serialize};

use crate::protocol::Protocol;

/// Difficulty badge shown on a workflow card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(label)
    }
}

/// One protocol's rendition of a workflow: a short framing note plus the
/// literal multi-line source text, copied verbatim (newlines and comments
/// included) by the clipboard action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub description: String,
    pub code: String,
}

/// A multi-step example scenario showing the same task expressed in all
/// three protocols, with expected outcome and guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Unique key; also the handle used by `workflow show <id>`.
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub expected_result: String,
    pub pro_tip: String,
    pub mcp: CodeSample,
    pub cli: CodeSample,
    pub test_runner: CodeSample,
}

impl Workflow {
    pub fn sample(&self, protocol: Protocol) -> &CodeSample {
        match protocol {
            Protocol::Mcp => &self.mcp,
            Protocol::Cli => &self.cli,
            Protocol::TestRunner => &self.test_runner,
        }
    }
}
