//! Scoring stage.

use rand::RngCore;
use tracing::debug;

use crate::traits::scoring::{DocumentContext, ScoringStrategy};
use crate::types::sentence::Sentence;
use crate::types::summary::ScoredSentence;

/// Score every sentence, keeping document order.
///
/// Returns one record per input sentence; duplicates by text stay separate.
pub fn score_sentences(
    sentences: &[Sentence],
    strategy: &dyn ScoringStrategy,
    rng: &mut dyn RngCore,
) -> Vec<ScoredSentence> {
    let document = DocumentContext::new(sentences);

    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let position = index + 1;
            let score = strategy.score(sentence, position, &document, &mut *rng);
            debug!(
                strategy = strategy.name(),
                position,
                score,
                sentence = %sentence,
                "Scored sentence"
            );
            ScoredSentence::new(position, sentence.clone(), score)
        })
        .collect()
}
