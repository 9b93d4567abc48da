//! Domain model for the knowledge-base document tree.
//!
//! # Responsibility
//! - Define the canonical category/subcategory/article shapes.
//! - Enforce identity invariants (unique ids, scoped slugs) at load time.
//!
//! # Invariants
//! - The loaded `KnowledgeBase` is the single source of truth; views are
//!   derived projections and never write back into it.
//! - A dangling `next_step` reference is tolerated, never fatal.

pub mod article;
