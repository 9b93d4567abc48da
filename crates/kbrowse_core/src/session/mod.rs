//! Application session state and transitions.
//!
//! # Responsibility
//! - Own the loaded tree, the current view state, the last-search variable
//!   and the edit-mode flag behind controlled accessors.
//! - Drive every navigation transition, pushing a canonical history entry
//!   before projecting the next view.
//!
//! # Invariants
//! - The tree is read-only after construction; edits never write back.
//! - Every user transition pushes exactly one history entry, even when the
//!   target state equals the current one.
//! - Popstate handling is stateless: it re-resolves from the URL alone.

mod app;

pub use app::Session;
