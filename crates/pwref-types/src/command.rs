use std::fmt;

use serde::{Deserialize, Serialize};

use crate::protocol::Protocol;

/// How (and whether) a conceptual browser action is invoked under one
/// protocol.
///
/// Replaces the em-dash placeholder the upstream reference data used for
/// "no equivalent": absence is a distinct variant, so a real command text
/// can never collide with the placeholder. In the catalog TOML an absent
/// key means `NotApplicable`, and serialization omits the field again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Invocation {
    Command(String),
    NotApplicable,
}

impl Invocation {
    pub fn is_available(&self) -> bool {
        matches!(self, Invocation::Command(_))
    }

    /// The invocation text, if this protocol has an equivalent.
    pub fn text(&self) -> Option<&str> {
        match self {
            Invocation::Command(text) => Some(text),
            Invocation::NotApplicable => None,
        }
    }
}

impl Default for Invocation {
    fn default() -> Self {
        Invocation::NotApplicable
    }
}

impl From<Option<String>> for Invocation {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => Invocation::Command(text),
            None => Invocation::NotApplicable,
        }
    }
}

impl From<Invocation> for Option<String> {
    fn from(value: Invocation) -> Self {
        match value {
            Invocation::Command(text) => Some(text),
            Invocation::NotApplicable => None,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Command(text) => f.write_str(text),
            Invocation::NotApplicable => f.write_str("—"),
        }
    }
}

/// One conceptual browser action represented across the three protocols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Human-readable action label (e.g. "Click Element").
    pub action: String,
    #[serde(default, skip_serializing_if = "is_not_applicable")]
    pub mcp: Invocation,
    #[serde(default, skip_serializing_if = "is_not_applicable")]
    pub cli: Invocation,
    #[serde(default, skip_serializing_if = "is_not_applicable")]
    pub test: Invocation,
    /// Marks the most-used commands (the "hot dot" in the rendered table).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hot: bool,
}

fn is_not_applicable(invocation: &Invocation) -> bool {
    !invocation.is_available()
}

impl Command {
    pub fn invocation(&self, protocol: Protocol) -> &Invocation {
        match protocol {
            Protocol::Mcp => &self.mcp,
            Protocol::Cli => &self.cli,
            Protocol::TestRunner => &self.test,
        }
    }

    /// Case-insensitive substring match against the action label and every
    /// available invocation. `query_lower` must already be lower-cased.
    /// Not-applicable fields never match.
    pub fn matches(&self, query_lower: &str) -> bool {
        if self.action.to_lowercase().contains(query_lower) {
            return true;
        }
        Protocol::all().iter().any(|protocol| {
            self.invocation(*protocol)
                .text()
                .is_some_and(|text| text.to_lowercase().contains(query_lower))
        })
    }
}

/// A named, ordered group of related commands sharing a theme.
///
/// Ordering of categories, and of commands within a category, is
/// display-significant and must survive filtering unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub icon: String,
    /// Section color as a `#rrggbb` hex string.
    pub color: String,
    /// Lighter companion color for chips and badges.
    pub accent: String,
    /// One-line guidance shown above the category's table.
    pub tip: String,
    pub commands: Vec<Command>,
}

impl Category {
    /// Commands in this category with an equivalent under `protocol`.
    pub fn available_count(&self, protocol: Protocol) -> usize {
        self.commands
            .iter()
            .filter(|command| command.invocation(protocol).is_available())
            .count()
    }
}
