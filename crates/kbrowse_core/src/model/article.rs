//! Article tree model.
//!
//! # Responsibility
//! - Mirror the `knowledgebase.json` document shape one-to-one.
//! - Provide borrowed lookup helpers for id and slug resolution.
//!
//! # Invariants
//! - `Article::id` is unique across the whole knowledge base.
//! - Category slugs are unique; subcategory slugs are unique per category.
//! - `next_step` may reference a missing article; callers must treat that as
//!   "no next step", not as an error.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable integer identifier for an article.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ArticleId = u64;

/// Leaf content unit of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique across the whole knowledge base.
    pub id: ArticleId,
    pub title: String,
    /// Restricted Markdown subset (bold spans plus newlines).
    pub content: String,
    /// Free-form labels used by search; no normalization is applied.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional follow-up article reference, serialized as `nextStep`.
    #[serde(rename = "nextStep", default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<ArticleId>,
}

/// Named article grouping inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub title: String,
    /// URL-safe identifier, unique within the owning category.
    pub slug: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Top-level grouping of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    /// URL-safe identifier, unique across categories.
    pub slug: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Total number of articles across all subcategories.
    pub fn article_count(&self) -> usize {
        self.subcategories.iter().map(|sub| sub.articles.len()).sum()
    }
}

/// The whole document: an ordered sequence of categories.
///
/// Loaded once at startup and immutable for the process lifetime; edits made
/// in a rendered view are never written back here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    pub categories: Vec<Category>,
}

/// Identity violation detected by [`KnowledgeBase::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeValidationError {
    /// Two articles share the same id.
    DuplicateArticleId(ArticleId),
    /// Two categories share the same slug.
    DuplicateCategorySlug(String),
    /// Two subcategories inside one category share the same slug.
    DuplicateSubcategorySlug {
        category_slug: String,
        subcategory_slug: String,
    },
}

impl Display for TreeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateArticleId(id) => write!(f, "duplicate article id: {id}"),
            Self::DuplicateCategorySlug(slug) => {
                write!(f, "duplicate category slug: `{slug}`")
            }
            Self::DuplicateSubcategorySlug {
                category_slug,
                subcategory_slug,
            } => write!(
                f,
                "duplicate subcategory slug `{subcategory_slug}` in category `{category_slug}`"
            ),
        }
    }
}

impl Error for TreeValidationError {}

impl KnowledgeBase {
    /// Checks identity invariants over the whole tree.
    ///
    /// Dangling `next_step` references are deliberately not checked here;
    /// they degrade to a missing link at render time.
    ///
    /// # Errors
    /// - Returns the first duplicate article id, category slug, or
    ///   per-category subcategory slug encountered in source order.
    pub fn validate(&self) -> Result<(), TreeValidationError> {
        let mut article_ids = HashSet::new();
        let mut category_slugs = HashSet::new();

        for category in &self.categories {
            if !category_slugs.insert(category.slug.as_str()) {
                return Err(TreeValidationError::DuplicateCategorySlug(
                    category.slug.clone(),
                ));
            }
            let mut subcategory_slugs = HashSet::new();
            for subcategory in &category.subcategories {
                if !subcategory_slugs.insert(subcategory.slug.as_str()) {
                    return Err(TreeValidationError::DuplicateSubcategorySlug {
                        category_slug: category.slug.clone(),
                        subcategory_slug: subcategory.slug.clone(),
                    });
                }
                for article in &subcategory.articles {
                    if !article_ids.insert(article.id) {
                        return Err(TreeValidationError::DuplicateArticleId(article.id));
                    }
                }
            }
        }
        Ok(())
    }

    /// Finds an article anywhere in the tree by id.
    pub fn find_article(&self, id: ArticleId) -> Option<&Article> {
        self.categories
            .iter()
            .flat_map(|category| &category.subcategories)
            .flat_map(|subcategory| &subcategory.articles)
            .find(|article| article.id == id)
    }

    /// Finds a category by slug.
    pub fn find_category(&self, slug: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.slug == slug)
    }

    /// Total number of articles in the tree.
    pub fn article_count(&self) -> usize {
        self.categories
            .iter()
            .map(Category::article_count)
            .sum()
    }
}
