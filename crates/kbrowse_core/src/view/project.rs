use crate::index::find_flat;
use crate::model::article::{ArticleId, Category, KnowledgeBase};
use crate::nav::ViewState;
use crate::text::render_to_display;
use log::warn;

/// Declarative description of what the UI should show.
///
/// The chrome flags travel with every body so an adapter can render the
/// shared controls without inspecting the body variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescription {
    /// Visible in every state except the categories view.
    pub back_to_categories_visible: bool,
    /// Visible only on the article detail view.
    pub back_visible: bool,
    pub body: ViewBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Categories(CategoriesView),
    ArticleList(ArticleListView),
    ArticleDetail(ArticleDetailView),
    SearchResults(SearchResultsView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub title: String,
    pub slug: String,
    pub subcategory_count: usize,
    pub article_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoriesView {
    pub cards: Vec<CategoryCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLink {
    pub id: ArticleId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryGroup {
    pub title: String,
    pub slug: String,
    pub articles: Vec<ArticleLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListView {
    pub category_title: String,
    pub category_slug: String,
    pub groups: Vec<SubcategoryGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetailView {
    pub id: ArticleId,
    pub title: String,
    /// Content rendered through the Markdown-subset transform.
    pub body_html: String,
    pub tags: Vec<String>,
    pub category_title: String,
    pub subcategory_title: String,
    /// Absent when the article has no next step or the reference dangles.
    pub next_step: Option<ArticleLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHitView {
    pub id: ArticleId,
    pub title: String,
    pub category_title: String,
    pub subcategory_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultsView {
    /// Formatted exactly as `Search Results for "<query>" (<n> found)`.
    pub heading: String,
    pub query: String,
    pub hits: Vec<SearchHitView>,
}

/// Projects the current state onto a view description.
///
/// Pure apart from diagnostic logging. A state that references an entity no
/// longer present in the tree (possible only if states outlive a reload)
/// degrades to the categories view.
pub fn project(kb: &KnowledgeBase, state: &ViewState) -> ViewDescription {
    let body = match state {
        ViewState::Categories => ViewBody::Categories(categories_view(kb)),
        ViewState::ArticleList { category_slug } => match kb.find_category(category_slug) {
            Some(category) => ViewBody::ArticleList(article_list_view(category)),
            None => {
                warn!(
                    "event=stale_state module=view status=fallback kind=category slug={category_slug}"
                );
                ViewBody::Categories(categories_view(kb))
            }
        },
        ViewState::ArticleDetail { context } => match article_detail_view(kb, context.article_id) {
            Some(detail) => ViewBody::ArticleDetail(detail),
            None => {
                warn!(
                    "event=stale_state module=view status=fallback kind=article id={}",
                    context.article_id
                );
                ViewBody::Categories(categories_view(kb))
            }
        },
        ViewState::SearchResults { query, results } => {
            ViewBody::SearchResults(SearchResultsView {
                heading: format!("Search Results for \"{query}\" ({} found)", results.len()),
                query: query.clone(),
                hits: results
                    .iter()
                    .map(|hit| SearchHitView {
                        id: hit.id,
                        title: hit.title.clone(),
                        category_title: hit.category_title.clone(),
                        subcategory_title: hit.subcategory_title.clone(),
                    })
                    .collect(),
            })
        }
    };

    let is_categories = matches!(body, ViewBody::Categories(_));
    let is_detail = matches!(body, ViewBody::ArticleDetail(_));
    ViewDescription {
        back_to_categories_visible: !is_categories,
        back_visible: is_detail,
        body,
    }
}

fn categories_view(kb: &KnowledgeBase) -> CategoriesView {
    CategoriesView {
        cards: kb
            .categories
            .iter()
            .map(|category| CategoryCard {
                title: category.title.clone(),
                slug: category.slug.clone(),
                subcategory_count: category.subcategories.len(),
                article_count: category.article_count(),
            })
            .collect(),
    }
}

fn article_list_view(category: &Category) -> ArticleListView {
    ArticleListView {
        category_title: category.title.clone(),
        category_slug: category.slug.clone(),
        groups: category
            .subcategories
            .iter()
            .map(|subcategory| SubcategoryGroup {
                title: subcategory.title.clone(),
                slug: subcategory.slug.clone(),
                articles: subcategory
                    .articles
                    .iter()
                    .map(|article| ArticleLink {
                        id: article.id,
                        title: article.title.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn article_detail_view(kb: &KnowledgeBase, id: ArticleId) -> Option<ArticleDetailView> {
    let flat = find_flat(kb, id)?;
    let next_step = flat.next_step.and_then(|next_id| {
        match kb.find_article(next_id) {
            Some(next) => Some(ArticleLink {
                id: next.id,
                title: next.title.clone(),
            }),
            None => {
                warn!(
                    "event=next_step_dangling module=view status=skipped article={id} next={next_id}"
                );
                None
            }
        }
    });
    Some(ArticleDetailView {
        id: flat.id,
        title: flat.title,
        body_html: render_to_display(&flat.content),
        tags: flat.tags,
        category_title: flat.category_title,
        subcategory_title: flat.subcategory_title,
        next_step,
    })
}
