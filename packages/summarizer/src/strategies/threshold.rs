//! Deterministic confidence-threshold classification.

use rand::RngCore;

use crate::error::{Result, SummarizerError};
use crate::traits::classification::{ClassificationContext, ClassificationStrategy};
use crate::types::summary::ScoredSentence;

/// Keep a sentence iff its confidence reaches the threshold.
///
/// Confidence is the sentence's score relative to the best non-title score
/// in the selection, so it lies in [0, 1]. The title counts as 1.0, and so
/// does every sentence when all regular scores are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdStrategy {
    threshold: f64,
}

impl ThresholdStrategy {
    /// Create a strategy; `threshold` must be within [0, 1].
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(SummarizerError::invalid_config(format!(
                "confidence threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Confidence of `candidate` given the selection.
    pub fn confidence(candidate: &ScoredSentence, context: &ClassificationContext) -> f64 {
        if candidate.is_title() {
            return 1.0;
        }
        match context.best_score {
            Some(best) if best > 0 => f64::from(candidate.score) / f64::from(best),
            _ => 1.0,
        }
    }
}

impl ClassificationStrategy for ThresholdStrategy {
    fn name(&self) -> &'static str {
        "threshold"
    }

    fn classify(
        &self,
        candidate: &ScoredSentence,
        context: &ClassificationContext,
        _rng: &mut dyn RngCore,
    ) -> bool {
        Self::confidence(candidate, context) >= self.threshold
    }
}
