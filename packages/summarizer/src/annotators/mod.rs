//! Annotator implementations for various NLP backends.
//!
//! This module provides concrete implementations of the `Annotator` trait.
//!
//! # Available Annotators
//!
//! - `RuleBasedAnnotator` - Regex sentence splitting and whitespace tokens
//! - `CoreNlpAnnotator` - Stanford CoreNLP server (requires `corenlp` feature)
//! - `MockAnnotator` - For testing (see [`crate::testing`])
//!
//! # Example
//!
//! ```rust,ignore
//! use summarizer::annotators::RuleBasedAnnotator;
//! use summarizer::{Annotator, Capability};
//!
//! let sentences = RuleBasedAnnotator::new().annotate(text, &Capability::for_summary())?;
//! ```

pub mod rule_based;

#[cfg(feature = "corenlp")]
pub mod corenlp;

pub use rule_based::RuleBasedAnnotator;

#[cfg(feature = "corenlp")]
pub use corenlp::CoreNlpAnnotator;

// Re-export from traits for convenience
pub use crate::traits::annotator::Annotator;
