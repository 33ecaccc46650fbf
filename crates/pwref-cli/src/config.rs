use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pwref_engine::ViewMode;
use pwref_types::Protocol;

/// User configuration for pwref (`~/.pwref/config.toml`).
///
/// Every field has a default, and a missing file is not an error — the
/// tool is fully usable with zero configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Grouping used when no search is active ("category" or "all").
    #[serde(default)]
    pub default_view: ViewMode,

    /// Tab preselected for workflow code samples.
    #[serde(default)]
    pub default_protocol: Protocol,

    /// Optional external catalog, overridden by the --catalog flag.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_view: ViewMode::default(),
            default_protocol: Protocol::default(),
            catalog: None,
        }
    }
}

impl Config {
    /// Load config from a specific path, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}
