//! Scoring strategy trait.

use std::collections::HashSet;

use rand::RngCore;

use crate::types::sentence::Sentence;
use crate::types::summary::Score;

/// Assigns an importance score to one sentence.
///
/// Strategies see the sentence, its 1-based position and document-wide
/// facts. The random source is passed in so callers control seeding.
pub trait ScoringStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Score the sentence at `position` (1-based).
    fn score(
        &self,
        sentence: &Sentence,
        position: usize,
        document: &DocumentContext,
        rng: &mut dyn RngCore,
    ) -> Score;
}

/// Facts about the whole document, computed once per call.
#[derive(Debug, Clone, Default)]
pub struct DocumentContext {
    total: usize,
    title_tokens: HashSet<String>,
}

impl DocumentContext {
    /// Build the context for a document's sentences.
    pub fn new(sentences: &[Sentence]) -> Self {
        let title_tokens = sentences
            .first()
            .map(|title| {
                title
                    .tokens()
                    .iter()
                    .map(|t| t.word.to_lowercase())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            total: sentences.len(),
            title_tokens,
        }
    }

    /// Number of sentences in the document.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Case-insensitive membership in the title's token set.
    pub fn is_title_token(&self, word: &str) -> bool {
        self.title_tokens.contains(&word.to_lowercase())
    }
}
