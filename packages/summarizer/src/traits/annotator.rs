//! Annotator trait for NLP preprocessing.
//!
//! Sentence splitting, tokenization and tagging are not done by this crate.
//! An annotator wraps whatever NLP service the application uses and returns
//! the document as an ordered list of sentences.

use crate::error::AnnotationResult;
use crate::types::sentence::{Capability, Sentence};

/// Annotator trait for NLP preprocessing.
///
/// The call is a single blocking request returning the whole document.
/// Timeouts and retries are the implementation's business; the pipeline
/// never retries.
pub trait Annotator: Send + Sync {
    /// Annotate `text`, returning its sentences in document order.
    ///
    /// Implementations must fail with
    /// [`AnnotationError::UnsupportedCapability`](crate::error::AnnotationError::UnsupportedCapability)
    /// rather than silently skip a capability they cannot provide.
    fn annotate(&self, text: &str, capabilities: &[Capability]) -> AnnotationResult<Vec<Sentence>>;
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn annotate(&self, text: &str, capabilities: &[Capability]) -> AnnotationResult<Vec<Sentence>> {
        (**self).annotate(text, capabilities)
    }
}

impl<A: Annotator + ?Sized> Annotator for std::sync::Arc<A> {
    fn annotate(&self, text: &str, capabilities: &[Capability]) -> AnnotationResult<Vec<Sentence>> {
        (**self).annotate(text, capabilities)
    }
}
