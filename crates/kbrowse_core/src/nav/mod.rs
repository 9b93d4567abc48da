//! URL-driven navigation state machine.
//!
//! # Responsibility
//! - Parse and serialize the three query parameters (`id`, `category`,
//!   `search`) that fully describe a restorable view.
//! - Resolve a view state from a URL with the fixed priority order.
//! - Abstract browser-history pushes behind a capability trait.
//!
//! # Invariants
//! - History navigation is stateless: any URL plus the immutable tree is
//!   enough to reconstruct the view.
//! - Lookup misses fall back to the categories view silently, never error.

mod history;
mod query;
mod state;

pub use history::{HistorySink, MemoryHistory};
pub use query::QueryParams;
pub use state::{resolve_query, NavigationContext, Origin, ViewState};
