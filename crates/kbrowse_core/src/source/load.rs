use crate::model::article::{KnowledgeBase, TreeValidationError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Result type for document loading.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Fatal load-time failure. There is no recovery path; the caller shows a
/// static error view and stops.
#[derive(Debug)]
pub enum DocumentError {
    /// The document could not be read from its source.
    Io(std::io::Error),
    /// The document is not well-formed JSON for the expected shape.
    Parse(serde_json::Error),
    /// The document parsed but violates an identity invariant.
    Invalid(TreeValidationError),
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read knowledge base: {err}"),
            Self::Parse(err) => write!(f, "failed to parse knowledge base: {err}"),
            Self::Invalid(err) => write!(f, "invalid knowledge base: {err}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DocumentError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<TreeValidationError> for DocumentError {
    fn from(value: TreeValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Parses and validates a knowledge-base document from a JSON string.
///
/// # Errors
/// - [`DocumentError::Parse`] when the JSON does not match the schema.
/// - [`DocumentError::Invalid`] when an identity invariant is violated.
pub fn load_document_str(json: &str) -> DocumentResult<KnowledgeBase> {
    let kb: KnowledgeBase = serde_json::from_str(json)?;
    kb.validate()?;
    info!(
        "event=document_loaded module=source status=ok categories={} articles={}",
        kb.categories.len(),
        kb.article_count()
    );
    Ok(kb)
}

/// Reads, parses and validates a knowledge-base document from disk.
///
/// # Errors
/// - [`DocumentError::Io`] when the file cannot be read.
/// - Everything [`load_document_str`] can return.
pub fn load_document_file(path: impl AsRef<Path>) -> DocumentResult<KnowledgeBase> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).inspect_err(|err| {
        error!(
            "event=document_read_failed module=source status=error path={} detail={err}",
            path.display()
        );
    })?;
    load_document_str(&json)
}
