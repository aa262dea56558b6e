//! Indicative classification stage.

use rand::RngCore;
use tracing::debug;

use crate::traits::classification::{ClassificationContext, ClassificationStrategy};
use crate::types::summary::{ScoredSentence, TITLE_SENTINEL};

/// Keep the sentences the strategy deems indicative, in order.
///
/// The first sentence of the selection is always kept.
pub fn classify_indicative(
    selected: Vec<ScoredSentence>,
    strategy: &dyn ClassificationStrategy,
    rng: &mut dyn RngCore,
) -> Vec<ScoredSentence> {
    let total = selected.len();
    let best_score = selected
        .iter()
        .map(|s| s.score)
        .filter(|score| *score != TITLE_SENTINEL)
        .max();

    selected
        .into_iter()
        .enumerate()
        .filter(|(rank, candidate)| {
            if *rank == 0 {
                return true;
            }
            let context = ClassificationContext {
                rank: *rank,
                selected: total,
                best_score,
            };
            let keep = strategy.classify(candidate, &context, &mut *rng);
            if !keep {
                debug!(
                    strategy = strategy.name(),
                    position = candidate.position,
                    "Dropped non-indicative sentence"
                );
            }
            keep
        })
        .map(|(_, candidate)| candidate)
        .collect()
}
