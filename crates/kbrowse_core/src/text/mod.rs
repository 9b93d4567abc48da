//! Bidirectional Markdown-subset / HTML-fragment transform.
//!
//! # Responsibility
//! - Render the bold/line-break Markdown subset to an HTML fragment.
//! - Extract edited HTML back into JSON-embeddable Markdown.
//!
//! # Invariants
//! - Only bold spans and newlines are recognized; everything else passes
//!   through untouched and is out of contract.
//! - Extraction emits the literal two characters `\` `n` for line breaks and
//!   escapes double quotes, so output pastes into a JSON string value.

mod markdown;

pub use markdown::{extract_markdown, render_to_display};
