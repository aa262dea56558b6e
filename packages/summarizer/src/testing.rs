//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the summarizer
//! without calling a real NLP service or relying on coin flips.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rand::RngCore;

use crate::annotators::rule_based::split_sentences;
use crate::error::{AnnotationError, AnnotationResult};
use crate::traits::{
    annotator::Annotator,
    classification::{ClassificationContext, ClassificationStrategy},
};
use crate::types::sentence::{Capability, Sentence};
use crate::types::summary::ScoredSentence;

/// A mock annotator for testing.
///
/// Returns canned sentences per document, or splits the text on sentence
/// punctuation and whitespace when nothing is canned. Clones share state,
/// so a clone kept by the test sees the calls made through the original.
#[derive(Default, Clone)]
pub struct MockAnnotator {
    /// Predefined sentences by document text
    documents: Arc<RwLock<HashMap<String, Vec<Sentence>>>>,

    /// Sentences returned for any document without a canned entry
    fallback: Arc<RwLock<Option<Vec<Sentence>>>>,

    /// When set, every call fails with this reason
    failure: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockAnnotatorCall>>>,
}

/// Record of a call made to the mock annotator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockAnnotatorCall {
    pub text: String,
    pub capabilities: Vec<Capability>,
}

impl MockAnnotator {
    /// Create a new mock annotator with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose every call fails as if the service were down.
    pub fn failing(reason: impl Into<String>) -> Self {
        let mock = Self::default();
        *mock.failure.write().unwrap() = Some(reason.into());
        mock
    }

    /// Return `sentences` for any document.
    pub fn with_sentences(self, sentences: Vec<Sentence>) -> Self {
        *self.fallback.write().unwrap() = Some(sentences);
        self
    }

    /// Return `sentences` for exactly this document text.
    pub fn with_document(self, text: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        self.documents
            .write()
            .unwrap()
            .insert(text.into(), sentences);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockAnnotatorCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Annotator for MockAnnotator {
    fn annotate(&self, text: &str, capabilities: &[Capability]) -> AnnotationResult<Vec<Sentence>> {
        self.calls.write().unwrap().push(MockAnnotatorCall {
            text: text.to_string(),
            capabilities: capabilities.to_vec(),
        });

        if let Some(reason) = self.failure.read().unwrap().clone() {
            return Err(AnnotationError::Unavailable(reason.into()));
        }

        if let Some(sentences) = self.documents.read().unwrap().get(text) {
            return Ok(sentences.clone());
        }

        if let Some(sentences) = self.fallback.read().unwrap().clone() {
            return Ok(sentences);
        }

        Ok(split_sentences(text)
            .into_iter()
            .map(Sentence::from_text)
            .collect())
    }
}

/// A deterministic classifier for testing.
///
/// Decision `i` applies to the sentence at rank `i + 1` of the selection
/// (rank 0 is always kept by the pipeline). Ranks past the end of the list
/// get the fallback decision.
#[derive(Debug, Clone, Default)]
pub struct FixedClassifier {
    decisions: Vec<bool>,
    fallback: bool,
}

impl FixedClassifier {
    /// Use `decisions` for ranks 1.., dropping anything beyond them.
    pub fn new(decisions: impl IntoIterator<Item = bool>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            fallback: false,
        }
    }

    /// Keep every sentence.
    pub fn keep_all() -> Self {
        Self {
            decisions: Vec::new(),
            fallback: true,
        }
    }

    /// Keep only the first sentence.
    pub fn keep_first_only() -> Self {
        Self::new(Vec::new())
    }
}

impl ClassificationStrategy for FixedClassifier {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn classify(
        &self,
        _candidate: &ScoredSentence,
        context: &ClassificationContext,
        _rng: &mut dyn RngCore,
    ) -> bool {
        context
            .rank
            .checked_sub(1)
            .and_then(|i| self.decisions.get(i).copied())
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_mock_annotator_default_split() {
        let annotator = MockAnnotator::new();
        let sentences = annotator
            .annotate("First one. Second one!", &Capability::for_summary())
            .unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].text(), "Second one!");

        // Check call was recorded
        let calls = annotator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].text, "First one. Second one!");
    }

    #[test]
    fn test_mock_annotator_documents_win_over_fallback() {
        let annotator = MockAnnotator::new()
            .with_sentences(vec![Sentence::from_text("fallback")])
            .with_document("known", vec![Sentence::from_text("canned")]);

        let known = annotator.annotate("known", &[]).unwrap();
        let other = annotator.annotate("other", &[]).unwrap();
        assert_eq!(known[0].text(), "canned");
        assert_eq!(other[0].text(), "fallback");
    }

    #[test]
    fn test_fixed_classifier_presets() {
        let candidate = ScoredSentence::new(2, Sentence::from_text("B."), 10);
        let mut rng = StdRng::seed_from_u64(0);

        for rank in 1..4 {
            let context = ClassificationContext {
                rank,
                selected: 4,
                best_score: Some(10),
            };
            assert!(FixedClassifier::keep_all().classify(&candidate, &context, &mut rng));
            assert!(!FixedClassifier::keep_first_only().classify(&candidate, &context, &mut rng));
        }
    }

    #[test]
    fn test_fixed_classifier_decisions_then_fallback() {
        let candidate = ScoredSentence::new(2, Sentence::from_text("B."), 10);
        let mut rng = StdRng::seed_from_u64(0);
        let classifier = FixedClassifier::new([true, false]);

        let decisions: Vec<_> = (1..5)
            .map(|rank| {
                let context = ClassificationContext {
                    rank,
                    selected: 5,
                    best_score: None,
                };
                classifier.classify(&candidate, &context, &mut rng)
            })
            .collect();
        assert_eq!(decisions, [true, false, false, false]);
    }

    #[test]
    fn test_mock_annotator_failure_still_records_call() {
        let annotator = MockAnnotator::failing("down");
        assert!(annotator.annotate("text", &[]).is_err());
        assert_eq!(annotator.calls().len(), 1);

        annotator.clear_calls();
        assert!(annotator.calls().is_empty());
    }
}
