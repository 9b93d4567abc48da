//! Substring search over the flat article index.
//!
//! # Responsibility
//! - Filter the flat index by case-insensitive substring containment.
//! - Keep result shaping deterministic and index-ordered.

mod filter;

pub use filter::search;
