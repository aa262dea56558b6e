//! Typed errors for the summarizer library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell an
//! annotation failure apart from a configuration mistake.

use thiserror::Error;

use crate::types::sentence::Capability;

/// Errors that can occur while summarizing or analyzing a document.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// The NLP annotation collaborator failed
    #[error("annotation failed: {0}")]
    Annotation(#[from] AnnotationError),

    /// A configuration value is out of range
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl SummarizerError {
    /// Build an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Errors raised by [`Annotator`](crate::traits::annotator::Annotator) implementations.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// Annotation service could not be reached or refused the request
    #[error("annotation service unavailable: {0}")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Annotation service answered with something we could not read
    #[error("malformed annotation response: {0}")]
    MalformedResponse(String),

    /// The annotator cannot provide a requested capability
    #[error("unsupported annotation capability: {0}")]
    UnsupportedCapability(Capability),
}

/// Result type alias for summarizer operations.
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Result type alias for annotation operations.
pub type AnnotationResult<T> = std::result::Result<T, AnnotationError>;
