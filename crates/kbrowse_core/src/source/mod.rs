//! Knowledge-base document loading.
//!
//! # Responsibility
//! - Deserialize `knowledgebase.json` into the domain tree.
//! - Surface load failures as typed, fatal errors.
//!
//! # Invariants
//! - Loading happens once per session; there is no retry or refresh path.
//! - A document that fails validation is rejected in full, never partially
//!   accepted.

mod load;

pub use load::{load_document_file, load_document_str, DocumentError, DocumentResult};
