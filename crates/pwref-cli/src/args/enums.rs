use clap::ValueEnum;

use pwref_types::Protocol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// clap-facing mirror of [`Protocol`] (`mcp`, `cli`, `test-runner`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProtocolArg {
    Mcp,
    Cli,
    TestRunner,
}

impl From<ProtocolArg> for Protocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Mcp => Protocol::Mcp,
            ProtocolArg::Cli => Protocol::Cli,
            ProtocolArg::TestRunner => Protocol::TestRunner,
        }
    }
}
