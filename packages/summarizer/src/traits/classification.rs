//! Classification strategy trait.

use rand::RngCore;

use crate::types::summary::{Score, ScoredSentence};

/// Decides whether a selected sentence is indicative of the document.
///
/// The first sentence of the selection is always kept by the pipeline and
/// never reaches the strategy.
pub trait ClassificationStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Return true to keep `candidate` in the summary.
    fn classify(
        &self,
        candidate: &ScoredSentence,
        context: &ClassificationContext,
        rng: &mut dyn RngCore,
    ) -> bool;
}

/// Where a candidate sits within the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationContext {
    /// 0-based rank within the selection
    pub rank: usize,

    /// Size of the selection
    pub selected: usize,

    /// Highest score in the selection excluding the title sentinel
    pub best_score: Option<Score>,
}
