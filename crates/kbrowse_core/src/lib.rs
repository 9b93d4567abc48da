//! Core domain logic for the knowledge-base browser.
//! This crate is the single source of truth for navigation and transform
//! invariants; UI adapters stay thin over the types exported here.

pub mod index;
pub mod logging;
pub mod model;
pub mod nav;
pub mod search;
pub mod session;
pub mod source;
pub mod text;
pub mod view;

pub use index::{find_flat, flatten, FlatArticle};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{
    Article, ArticleId, Category, KnowledgeBase, Subcategory, TreeValidationError,
};
pub use nav::{
    resolve_query, HistorySink, MemoryHistory, NavigationContext, Origin, QueryParams, ViewState,
};
pub use search::search;
pub use session::Session;
pub use source::{load_document_file, load_document_str, DocumentError, DocumentResult};
pub use text::{extract_markdown, render_to_display};
pub use view::{
    project, ArticleDetailView, ArticleListView, CategoriesView, SearchResultsView, ViewBody,
    ViewDescription,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
