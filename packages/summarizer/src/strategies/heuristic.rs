//! Heuristic feature-sum scoring.

use rand::RngCore;

use crate::traits::scoring::{DocumentContext, ScoringStrategy};
use crate::types::config::FeatureWeights;
use crate::types::sentence::Sentence;
use crate::types::summary::{Score, TITLE_SENTINEL};

/// Deterministic scorer summing structural and content features.
///
/// The title (position 1) always scores [`TITLE_SENTINEL`]. Every other
/// sentence starts at 0 and collects:
/// - `min_words_bonus` for more than `min_words` tokens
/// - `position_bonus` near the start or end of the document
/// - `key_phrase_bonus` per key phrase it contains
/// - `title_token_bonus` once if it shares a token with the title
#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    weights: FeatureWeights,
    /// Lowercased once; matching is case-insensitive
    key_phrases: Vec<String>,
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new(FeatureWeights::default())
    }
}

impl HeuristicStrategy {
    pub fn new(weights: FeatureWeights) -> Self {
        let key_phrases = weights
            .key_phrases
            .iter()
            .map(|p| p.to_lowercase())
            .collect();
        Self {
            weights,
            key_phrases,
        }
    }

    pub fn weights(&self) -> &FeatureWeights {
        &self.weights
    }

    fn near_edge(&self, position: usize, total: usize) -> bool {
        // position > total - bottom_few, without underflow
        position < self.weights.top_few_count
            || position.saturating_add(self.weights.bottom_few_count) > total
    }

    fn key_phrase_hits(&self, text: &str) -> u32 {
        let lower = text.to_lowercase();
        self.key_phrases
            .iter()
            .filter(|phrase| lower.contains(phrase.as_str()))
            .count() as u32
    }
}

impl ScoringStrategy for HeuristicStrategy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn score(
        &self,
        sentence: &Sentence,
        position: usize,
        document: &DocumentContext,
        _rng: &mut dyn RngCore,
    ) -> Score {
        if position == 1 {
            return TITLE_SENTINEL;
        }

        let w = &self.weights;
        let mut score: Score = 0;

        if sentence.word_count() > w.min_words {
            score = score.saturating_add(w.min_words_bonus);
        }

        if self.near_edge(position, document.total()) {
            score = score.saturating_add(w.position_bonus);
        }

        let hits = self.key_phrase_hits(sentence.text());
        score = score.saturating_add(w.key_phrase_bonus.saturating_mul(hits));

        if sentence
            .tokens()
            .iter()
            .any(|t| document.is_title_token(&t.word))
        {
            score = score.saturating_add(w.title_token_bonus);
        }

        // Only the title may carry the sentinel
        score.min(TITLE_SENTINEL - 1)
    }
}
