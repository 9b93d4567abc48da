use crate::index::{find_flat, flatten, FlatArticle};
use crate::model::article::{ArticleId, KnowledgeBase};
use crate::nav::query::QueryParams;
use crate::search::search;
use log::warn;

/// Where a detail view was entered from; drives the "back" action.
///
/// Carried in memory only; the URL never records the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Reached from a category's article list (or directly by URL).
    Browse {
        category_slug: String,
        subcategory_slug: String,
    },
    /// Reached from a search-results view.
    Search { query: String },
}

/// The displayed article plus its back-navigation pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    pub article_id: ArticleId,
    pub origin: Origin,
}

/// One of the four mutually exclusive views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Categories,
    ArticleList { category_slug: String },
    ArticleDetail { context: NavigationContext },
    SearchResults { query: String, results: Vec<FlatArticle> },
}

impl ViewState {
    /// Detail state for an article, with ancestry freshly derived from the
    /// live tree. `None` when the id does not resolve.
    pub fn detail(kb: &KnowledgeBase, id: ArticleId) -> Option<Self> {
        let flat = find_flat(kb, id)?;
        Some(Self::ArticleDetail {
            context: NavigationContext {
                article_id: id,
                origin: Origin::Browse {
                    category_slug: flat.category_slug,
                    subcategory_slug: flat.subcategory_slug,
                },
            },
        })
    }

    /// Search-results state for an already normalized (trimmed, lower-cased)
    /// query. Produced even when nothing matches.
    pub fn search_results(kb: &KnowledgeBase, query: &str) -> Self {
        let results = search(&flatten(kb), query);
        Self::SearchResults {
            query: query.to_string(),
            results,
        }
    }
}

/// Resolves a view state from URL parameters.
///
/// Priority order: `id`, then `category`, then `search`, then the categories
/// view. A lookup miss falls back to categories silently; this is the same
/// logic for the initial load and for every popstate, so history navigation
/// can reconstruct any view from the URL alone.
pub fn resolve_query(kb: &KnowledgeBase, params: &QueryParams) -> ViewState {
    if let Some(id) = params.id {
        return match ViewState::detail(kb, id) {
            Some(state) => state,
            None => {
                warn!("event=lookup_miss module=nav status=fallback kind=article id={id}");
                ViewState::Categories
            }
        };
    }
    if let Some(slug) = params.category.as_deref() {
        if kb.find_category(slug).is_some() {
            return ViewState::ArticleList {
                category_slug: slug.to_string(),
            };
        }
        warn!("event=lookup_miss module=nav status=fallback kind=category slug={slug}");
        return ViewState::Categories;
    }
    if let Some(query) = params.search.as_deref() {
        return ViewState::search_results(kb, &query.trim().to_lowercase());
    }
    ViewState::Categories
}
