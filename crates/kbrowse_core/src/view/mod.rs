//! Pure view projection.
//!
//! # Responsibility
//! - Turn (knowledge base, view state) into a declarative view description.
//! - Keep every imperative UI concern out; adapters bind the description to
//!   whatever document environment hosts the browser.
//!
//! # Invariants
//! - Projection never mutates the tree and has no side effects beyond
//!   diagnostic logging.
//! - Exactly one body variant is produced per state.

mod project;

pub use project::{
    project, ArticleDetailView, ArticleLink, ArticleListView, CategoriesView, CategoryCard,
    SearchHitView, SearchResultsView, SubcategoryGroup, ViewBody, ViewDescription,
};
