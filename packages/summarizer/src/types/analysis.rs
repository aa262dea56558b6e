//! Ticket analysis results.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Analysis of one ticket (one line of input).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketAnalysis {
    /// The ticket text as submitted
    pub text: String,

    /// Per-sentence breakdown
    pub sentences: Vec<SentenceAnalysis>,
}

/// Analysis of one annotated sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    pub text: String,

    /// Sentiment label from the annotator (e.g. "Negative")
    pub sentiment: Option<String>,

    /// Named-entity phrases keyed by tag, tags in first-seen order
    pub entities: IndexMap<String, Vec<String>>,

    /// Words of recognized entities keyed by part-of-speech tag
    pub parts_of_speech: IndexMap<String, Vec<String>>,
}
