//! The reference dataset and its loader.
//!
//! The dataset ships inside the binary as a TOML document. Everything the
//! tool renders — command categories, workflow examples, the head-to-head
//! table, setup cards — comes from one `Catalog` value that is parsed once
//! and never mutated. An external catalog file with the same schema can be
//! substituted via `--catalog` for teams that maintain their own command
//! sets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use pwref_types::{Category, ComparisonRow, SetupCard, Workflow};

const BUILTIN_TOML: &str = include_str!("../data/catalog.toml");

static BUILTIN: Lazy<Catalog> =
    Lazy::new(|| toml::from_str(BUILTIN_TOML).expect("embedded catalog is valid TOML"));

/// The full reference dataset. Immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub workflows: Vec<Workflow>,
    pub comparisons: Vec<ComparisonRow>,
    pub setup: Vec<SetupCard>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Load an external catalog (same TOML schema as the built-in one).
    pub fn load_from(path: &Path) -> Result<Catalog> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
        let catalog: Catalog = toml::from_str(&content)
            .with_context(|| format!("failed to parse catalog file: {}", path.display()))?;
        Ok(catalog)
    }

    pub fn workflow(&self, id: &str) -> Option<&Workflow> {
        self.workflows.iter().find(|workflow| workflow.id == id)
    }

    /// Case-insensitive category lookup by name.
    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwref_types::Protocol;

    #[test]
    fn builtin_catalog_parses_and_has_expected_shape() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.categories.len(), 8);
        assert_eq!(catalog.workflows.len(), 3);
        assert_eq!(catalog.comparisons.len(), 6);
        assert_eq!(catalog.setup.len(), 3);

        let actions: usize = catalog
            .categories
            .iter()
            .map(|category| category.commands.len())
            .sum();
        assert_eq!(actions, 45);
    }

    #[test]
    fn builtin_catalog_command_order_is_preserved() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.categories[0].name, "Navigation");
        assert_eq!(catalog.categories[0].commands[0].action, "Open / Navigate URL");
        assert_eq!(catalog.categories[7].name, "Mouse & Keys (CLI)");
    }

    #[test]
    fn builtin_workflows_carry_all_three_samples() {
        let catalog = Catalog::builtin();
        let login = catalog.workflow("login-auth").expect("login-auth exists");

        for protocol in Protocol::all() {
            let sample = login.sample(protocol);
            assert!(!sample.description.is_empty());
            assert!(!sample.code.is_empty());
        }
        assert!(login.sample(Protocol::Cli).code.contains("playwright open"));
    }

    #[test]
    fn category_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_index("navigation"), Some(0));
        assert_eq!(catalog.category_index("Tab Management"), Some(3));
        assert_eq!(catalog.category_index("No Such Category"), None);
    }

    #[test]
    fn external_catalog_loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            r##"
workflows = []
comparisons = []
setup = []

[[categories]]
name = "Navigation"
icon = "🧭"
color = "#b45309"
accent = "#fef3c7"
tip = "Only one category here."

[[categories.commands]]
action = "Open / Navigate URL"
mcp = "browser_navigate"
cli = "open <url>"
hot = true
"##,
        )
        .unwrap();

        let catalog = Catalog::load_from(&path).unwrap();
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.categories[0].commands[0].action, "Open / Navigate URL");
        assert!(catalog.workflows.is_empty());
    }

    #[test]
    fn missing_catalog_file_reports_path() {
        let err = Catalog::load_from(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.toml"));
    }
}
