//! Random baseline strategy.

use rand::{Rng, RngCore};

use crate::traits::{
    classification::{ClassificationContext, ClassificationStrategy},
    scoring::{DocumentContext, ScoringStrategy},
};
use crate::types::sentence::Sentence;
use crate::types::summary::{Score, ScoredSentence, TITLE_SENTINEL};

/// Highest score the baseline scorer draws.
pub const DEFAULT_MAX_RANDOM_SCORE: Score = 100;

/// Uniform random scoring and coin-flip classification.
///
/// Stands in for a learned model. Only the distribution is reproducible
/// unless the caller seeds the random source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomStrategy {
    max_score: Score,
    keep_probability: f64,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            max_score: DEFAULT_MAX_RANDOM_SCORE,
            keep_probability: 0.5,
        }
    }
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive upper bound for drawn scores.
    ///
    /// Capped below [`TITLE_SENTINEL`] so a drawn score is never mistaken
    /// for the title.
    pub fn with_max_score(mut self, max_score: Score) -> Self {
        self.max_score = max_score.min(TITLE_SENTINEL - 1);
        self
    }

    pub fn max_score(&self) -> Score {
        self.max_score
    }

    /// Set the keep probability, clamped to [0, 1] (NaN counts as 0).
    pub fn with_keep_probability(mut self, probability: f64) -> Self {
        self.keep_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    pub fn keep_probability(&self) -> f64 {
        self.keep_probability
    }
}

impl ScoringStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn score(
        &self,
        _sentence: &Sentence,
        _position: usize,
        _document: &DocumentContext,
        rng: &mut dyn RngCore,
    ) -> Score {
        rng.gen_range(0..=self.max_score)
    }
}

impl ClassificationStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn classify(
        &self,
        _candidate: &ScoredSentence,
        _context: &ClassificationContext,
        rng: &mut dyn RngCore,
    ) -> bool {
        rng.gen_bool(self.keep_probability)
    }
}
