//! Scored sentences and the rendered summary.

use serde::{Deserialize, Serialize};

use super::sentence::Sentence;

/// Importance score of a sentence.
pub type Score = u32;

/// Score reserved for the title sentence so it always ranks first.
pub const TITLE_SENTINEL: Score = Score::MAX;

/// A sentence together with its document position and score.
///
/// Sentences are identified by position, so two sentences with the same
/// wording stay distinct through every stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// 1-based position in the document
    pub position: usize,

    /// The sentence itself
    pub sentence: Sentence,

    /// Importance score
    pub score: Score,
}

impl ScoredSentence {
    pub fn new(position: usize, sentence: Sentence, score: Score) -> Self {
        Self {
            position,
            sentence,
            score,
        }
    }

    pub fn text(&self) -> &str {
        self.sentence.text()
    }

    /// Whether this sentence carries the title sentinel.
    pub fn is_title(&self) -> bool {
        self.score == TITLE_SENTINEL
    }
}

/// The indicative sentences of a document and the separator used to join them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Indicative sentences, in ranked order
    pub sentences: Vec<ScoredSentence>,

    /// Appended after every sentence, including the last
    pub separator: String,
}

impl Summary {
    pub fn new(sentences: Vec<ScoredSentence>, separator: impl Into<String>) -> Self {
        Self {
            sentences,
            separator: separator.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Render the summary as a single string.
    pub fn render(&self) -> String {
        crate::pipeline::render::render_summary(
            self.sentences.iter().map(|s| s.text()),
            &self.separator,
        )
    }
}

/// Every intermediate stage of one summarization run.
///
/// Useful for diagnostics: ranking and selection are deterministic in
/// heuristic mode, only `summary` depends on the random source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryReport {
    /// All sentences, descending by score
    pub ranked: Vec<ScoredSentence>,

    /// The top-K of `ranked`
    pub selected: Vec<ScoredSentence>,

    /// The indicative subset of `selected`
    pub summary: Summary,
}

impl SummaryReport {
    /// Report for a document with no sentences.
    pub fn empty(separator: impl Into<String>) -> Self {
        Self {
            ranked: Vec::new(),
            selected: Vec::new(),
            summary: Summary::new(Vec::new(), separator),
        }
    }

    /// Render the final summary.
    pub fn render(&self) -> String {
        self.summary.render()
    }
}
