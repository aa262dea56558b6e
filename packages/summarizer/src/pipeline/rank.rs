//! Ranking stage.

use crate::types::summary::ScoredSentence;

/// Sort by score, highest first.
///
/// The sort is stable: sentences with equal scores keep the order in which
/// they were scored.
pub fn rank_sentences(mut scored: Vec<ScoredSentence>) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
