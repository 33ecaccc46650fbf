use serde::{Deserialize, Serialize};

use pwref_types::Category;

use crate::filter::filter_categories;

/// How the command tables are grouped when no search is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// One category at a time, selected by index.
    #[serde(rename = "category")]
    ByCategory,
    /// Every category in dataset order.
    All,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::ByCategory
    }
}

impl ViewMode {
    pub fn toggle(&self) -> ViewMode {
        match self {
            ViewMode::ByCategory => ViewMode::All,
            ViewMode::All => ViewMode::ByCategory,
        }
    }
}

/// The sections to render, plus which chrome goes with them.
///
/// Section headings (with per-section match counts) only make sense when
/// more than one category can appear at once; category tips are suppressed
/// while a search is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedView {
    pub sections: Vec<Category>,
    pub show_headings: bool,
    pub show_tips: bool,
}

/// Decide which categories are displayed and how they are grouped.
///
/// A non-empty query overrides the view mode entirely. Otherwise `All`
/// shows the whole dataset and `ByCategory` shows the single category at
/// `active_category` in the unfiltered dataset. An out-of-range index
/// can only come from corrupted state; it falls back to the first
/// category instead of failing.
pub fn compose(
    categories: &[Category],
    view_mode: ViewMode,
    active_category: usize,
    query: &str,
) -> ComposedView {
    if !query.is_empty() {
        return ComposedView {
            sections: filter_categories(categories, query),
            show_headings: true,
            show_tips: false,
        };
    }

    match view_mode {
        ViewMode::All => ComposedView {
            sections: categories.to_vec(),
            show_headings: true,
            show_tips: true,
        },
        ViewMode::ByCategory => {
            let sections = match categories.len() {
                0 => Vec::new(),
                len => {
                    let index = if active_category < len { active_category } else { 0 };
                    vec![categories[index].clone()]
                }
            };
            ComposedView {
                sections,
                show_headings: false,
                show_tips: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwref_types::{Command, Invocation};

    fn category(name: &str, actions: &[&str]) -> Category {
        Category {
            name: name.to_string(),
            icon: "x".to_string(),
            color: "#000000".to_string(),
            accent: "#ffffff".to_string(),
            tip: format!("tip for {}", name),
            commands: actions
                .iter()
                .map(|action| Command {
                    action: action.to_string(),
                    mcp: Invocation::NotApplicable,
                    cli: Invocation::Command(action.to_lowercase()),
                    test: Invocation::NotApplicable,
                    hot: false,
                })
                .collect(),
        }
    }

    fn fixture() -> Vec<Category> {
        vec![
            category("Navigation", &["Open", "Reload"]),
            category("Interactions", &["Click", "Type"]),
            category("Sessions", &["List"]),
        ]
    }

    #[test]
    fn by_category_shows_exactly_the_active_one() {
        let view = compose(&fixture(), ViewMode::ByCategory, 1, "");
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].name, "Interactions");
        assert!(!view.show_headings);
        assert!(view.show_tips);
    }

    #[test]
    fn all_mode_ignores_active_category() {
        let view = compose(&fixture(), ViewMode::All, 2, "");
        let names: Vec<_> = view.sections.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Navigation", "Interactions", "Sessions"]);
        assert!(view.show_headings);
        assert!(view.show_tips);
    }

    #[test]
    fn search_overrides_view_mode() {
        let view = compose(&fixture(), ViewMode::ByCategory, 0, "click");
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].name, "Interactions");
        assert!(view.show_headings);
        assert!(!view.show_tips);
    }

    #[test]
    fn no_match_renders_zero_sections() {
        let view = compose(&fixture(), ViewMode::All, 0, "ZZZ-no-match");
        assert!(view.sections.is_empty());
    }

    #[test]
    fn out_of_range_index_falls_back_to_the_first_category() {
        let view = compose(&fixture(), ViewMode::ByCategory, 99, "");
        assert_eq!(view.sections[0].name, "Navigation");

        let empty: Vec<Category> = Vec::new();
        assert!(compose(&empty, ViewMode::ByCategory, 0, "").sections.is_empty());
    }

    #[test]
    fn builtin_all_view_shows_every_category_in_order() {
        let catalog = pwref_catalog::Catalog::builtin();
        let view = compose(&catalog.categories, ViewMode::All, 2, "");

        assert_eq!(view.sections, catalog.categories);
    }
}
