//! Heuristic Extractive Summarization Library
//!
//! Picks a handful of sentences out of a document and strings them together
//! into a digest. No model training: sentences are scored by cheap
//! structural and content features, ranked, cut to a top-K and filtered by
//! an indicative classifier.
//!
//! # Usage
//!
//! ```rust,ignore
//! use summarizer::{RuleBasedAnnotator, Summarizer, SummarizerConfig};
//!
//! let config = SummarizerConfig::default().with_max_sentences(5);
//! let summarizer = Summarizer::new(RuleBasedAnnotator::new(), config)?;
//!
//! // Heuristic feature scoring
//! let digest = summarizer.summarize(&document, true)?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Annotator, ScoringStrategy, ClassificationStrategy)
//! - [`types`] - Sentences, scores, configuration and analysis results
//! - [`pipeline`] - Scoring, ranking, selection, classification and rendering
//! - [`strategies`] - Random, heuristic and threshold strategies
//! - [`annotators`] - Annotator implementations (rule-based, CoreNLP)
//! - [`analyzer`] - Ticket analysis (sentiment, entities, parts of speech)
//! - [`testing`] - Mock implementations for testing

pub mod analyzer;
pub mod annotators;
pub mod error;
pub mod pipeline;
pub mod strategies;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{AnnotationError, AnnotationResult, Result, SummarizerError};
pub use traits::{
    annotator::Annotator,
    classification::{ClassificationContext, ClassificationStrategy},
    scoring::{DocumentContext, ScoringStrategy},
};
pub use types::{
    analysis::{SentenceAnalysis, TicketAnalysis},
    config::{
        ClassifierConfig, FeatureWeights, SummarizerConfig, DEFAULT_KEY_PHRASES,
        DEFAULT_MAX_SENTENCES, DEFAULT_SEPARATOR,
    },
    sentence::{Capability, Sentence, Token},
    summary::{Score, ScoredSentence, Summary, SummaryReport, TITLE_SENTINEL},
};

// Re-export Summarizer from pipeline
pub use pipeline::Summarizer;

// Re-export pipeline stages
pub use pipeline::{
    classify_indicative, rank_sentences, render_summary, score_sentences, select_top,
    summarize_sentences,
};

// Re-export strategies
pub use strategies::{HeuristicStrategy, RandomStrategy, ThresholdStrategy};

// Re-export analyzer
pub use analyzer::{TicketAnalyzer, DEFAULT_DICTIONARY};

// Re-export annotators
pub use annotators::RuleBasedAnnotator;

#[cfg(feature = "corenlp")]
pub use annotators::CoreNlpAnnotator;

// Re-export testing utilities
pub use testing::{FixedClassifier, MockAnnotator};
