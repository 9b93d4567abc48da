use crate::model::article::{ArticleId, KnowledgeBase};

/// An article decorated with its ancestry, as used by search and lookup.
///
/// Derived, never stored: the tree stays the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatArticle {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub next_step: Option<ArticleId>,
    pub category_title: String,
    pub category_slug: String,
    pub subcategory_title: String,
    pub subcategory_slug: String,
}

/// Flattens the tree into one entry per article, in source order.
///
/// Pure and deterministic; O(total articles) time and space.
pub fn flatten(kb: &KnowledgeBase) -> Vec<FlatArticle> {
    let mut entries = Vec::with_capacity(kb.article_count());
    for category in &kb.categories {
        for subcategory in &category.subcategories {
            for article in &subcategory.articles {
                entries.push(FlatArticle {
                    id: article.id,
                    title: article.title.clone(),
                    content: article.content.clone(),
                    tags: article.tags.clone(),
                    next_step: article.next_step,
                    category_title: category.title.clone(),
                    category_slug: category.slug.clone(),
                    subcategory_title: subcategory.title.clone(),
                    subcategory_slug: subcategory.slug.clone(),
                });
            }
        }
    }
    entries
}

/// Looks up one article by id with freshly derived ancestry.
///
/// Used by detail rendering and next-step navigation, which must re-derive
/// ancestry from the live tree rather than trust stored context.
pub fn find_flat(kb: &KnowledgeBase, id: ArticleId) -> Option<FlatArticle> {
    for category in &kb.categories {
        for subcategory in &category.subcategories {
            for article in &subcategory.articles {
                if article.id == id {
                    return Some(FlatArticle {
                        id: article.id,
                        title: article.title.clone(),
                        content: article.content.clone(),
                        tags: article.tags.clone(),
                        next_step: article.next_step,
                        category_title: category.title.clone(),
                        category_slug: category.slug.clone(),
                        subcategory_title: subcategory.title.clone(),
                        subcategory_slug: subcategory.slug.clone(),
                    });
                }
            }
        }
    }
    None
}
