//! Selection stage.

use tracing::debug;

use crate::types::summary::ScoredSentence;

/// Keep the first `max_sentences` of a ranked list.
pub fn select_top(mut ranked: Vec<ScoredSentence>, max_sentences: usize) -> Vec<ScoredSentence> {
    ranked.truncate(max_sentences);

    for (rank, kept) in ranked.iter().enumerate() {
        debug!(
            rank,
            position = kept.position,
            score = kept.score,
            sentence = %kept.sentence,
            "Kept top sentence"
        );
    }

    ranked
}
