use crate::index::FlatArticle;

/// Filters the index down to articles matching `query`.
///
/// The caller is responsible for trimming and lower-casing the query.
/// An article matches when the query is a substring of its title, its
/// content, or any tag, all compared case-insensitively. No ranking is
/// applied; hits keep index order (category-major).
pub fn search(index: &[FlatArticle], query: &str) -> Vec<FlatArticle> {
    index
        .iter()
        .filter(|entry| matches(entry, query))
        .cloned()
        .collect()
}

fn matches(entry: &FlatArticle, query: &str) -> bool {
    entry.title.to_lowercase().contains(query)
        || entry.content.to_lowercase().contains(query)
        || entry.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}
