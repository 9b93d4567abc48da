//! Flat article index derived from the document tree.
//!
//! # Responsibility
//! - Project the nested tree into a lookup-friendly flat list.
//! - Decorate each article with its category/subcategory ancestry.
//!
//! # Invariants
//! - Output order is category-major, then subcategory, then article,
//!   matching source order exactly.
//! - The index is recomputed on demand and never cached across calls.

mod flatten;

pub use flatten::{find_flat, flatten, FlatArticle};
