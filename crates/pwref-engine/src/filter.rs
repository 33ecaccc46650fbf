use pwref_types::Category;

/// Narrow `categories` to the commands matching `query`.
///
/// An empty query is the identity. Otherwise a command survives when the
/// lower-cased query is a substring of its action label or of any
/// available invocation text; categories left with no surviving commands
/// are dropped entirely. The relative order of categories and of commands
/// within each category is preserved (stable filter, never a re-sort).
pub fn filter_categories(categories: &[Category], query: &str) -> Vec<Category> {
    if query.is_empty() {
        return categories.to_vec();
    }

    let query_lower = query.to_lowercase();
    categories
        .iter()
        .filter_map(|category| {
            let commands: Vec<_> = category
                .commands
                .iter()
                .filter(|command| command.matches(&query_lower))
                .cloned()
                .collect();
            if commands.is_empty() {
                None
            } else {
                Some(Category {
                    commands,
                    ..category.clone()
                })
            }
        })
        .collect()
}
