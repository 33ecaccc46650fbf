use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three Playwright invocation styles compared by the reference.
///
/// "Protocol" here means an invocation style, not a network protocol:
/// structured MCP tool calls, CLI skill commands, or the test-runner API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Mcp,
    Cli,
    TestRunner,
}

impl Protocol {
    /// All protocols in display order (MCP first, matching the tab order).
    pub fn all() -> [Protocol; 3] {
        [Protocol::Mcp, Protocol::Cli, Protocol::TestRunner]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Mcp => "mcp",
            Protocol::Cli => "cli",
            Protocol::TestRunner => "test_runner",
        }
    }

    /// Tab / legend label.
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Mcp => "MCP Tools",
            Protocol::Cli => "CLI Skills",
            Protocol::TestRunner => "Test Runner",
        }
    }

    /// Column header used in the command tables.
    pub fn column(&self) -> &'static str {
        match self {
            Protocol::Mcp => "MCP Tool",
            Protocol::Cli => "CLI Skill",
            Protocol::TestRunner => "Test Runner",
        }
    }

    /// Package tag shown in the legend.
    pub fn package(&self) -> &'static str {
        match self {
            Protocol::Mcp => "@playwright/mcp",
            Protocol::Cli => "@playwright/cli",
            Protocol::TestRunner => "npx playwright",
        }
    }

    /// Source-language tag for code samples. MCP samples use a
    /// JavaScript-like syntax, so anything that is not shell falls back to
    /// "javascript".
    pub fn language(&self) -> &'static str {
        match self {
            Protocol::Cli => "bash",
            Protocol::Mcp | Protocol::TestRunner => "javascript",
        }
    }

    /// Comment prefix for the language tag, used to de-emphasize comment
    /// lines when rendering code samples.
    pub fn comment_prefix(&self) -> &'static str {
        match self.language() {
            "bash" => "#",
            _ => "//",
        }
    }

    /// The next tab in cycling order, wrapping around.
    pub fn next(&self) -> Protocol {
        match self {
            Protocol::Mcp => Protocol::Cli,
            Protocol::Cli => Protocol::TestRunner,
            Protocol::TestRunner => Protocol::Mcp,
        }
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::Mcp
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mcp" => Ok(Protocol::Mcp),
            "cli" => Ok(Protocol::Cli),
            "test_runner" | "test-runner" | "test" => Ok(Protocol::TestRunner),
            _ => Err(format!("unknown protocol: {}", s)),
        }
    }
}
