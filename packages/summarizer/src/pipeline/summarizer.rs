//! The Summarizer - main entry point for the summarizer library.
//!
//! Wires an [`Annotator`] to the scoring, ranking, selection, classification
//! and rendering stages. Each call builds its own random source, so calls
//! are independent and reproducible once a seed is configured.

use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::{info, warn};

use super::{classify_indicative, rank_sentences, score_sentences, select_top};
use crate::error::Result;
use crate::strategies::{classification_for, scoring_for};
use crate::traits::{
    annotator::Annotator, classification::ClassificationStrategy, scoring::ScoringStrategy,
};
use crate::types::{
    config::SummarizerConfig,
    sentence::{Capability, Sentence},
    summary::{Summary, SummaryReport},
};

/// The main entry point - summarizes documents through an annotator.
///
/// # Example
///
/// ```rust,ignore
/// let summarizer = Summarizer::new(RuleBasedAnnotator::new(), SummarizerConfig::default())?;
///
/// // Random baseline scoring
/// let digest = summarizer.summarize(&text, false)?;
///
/// // Heuristic scoring, with every intermediate stage
/// let report = summarizer.report(&text, true)?;
/// ```
pub struct Summarizer<A: Annotator> {
    annotator: A,
    config: SummarizerConfig,
    classifier: Option<Box<dyn ClassificationStrategy>>,
}

impl<A: Annotator> Summarizer<A> {
    /// Create a summarizer, rejecting invalid configuration up front.
    pub fn new(annotator: A, config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            annotator,
            config,
            classifier: None,
        })
    }

    /// Replace the configured classifier with a custom strategy.
    pub fn with_classifier(mut self, classifier: Box<dyn ClassificationStrategy>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration.
    ///
    /// Changes are validated on the next call.
    pub fn config_mut(&mut self) -> &mut SummarizerConfig {
        &mut self.config
    }

    /// Get a reference to the annotator.
    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    /// Summarize a document into a single string.
    ///
    /// Empty text yields an empty summary.
    pub fn summarize(&self, text: &str, use_heuristic_features: bool) -> Result<String> {
        Ok(self.report(text, use_heuristic_features)?.render())
    }

    /// Summarize a document, returning every intermediate stage.
    pub fn report(&self, text: &str, use_heuristic_features: bool) -> Result<SummaryReport> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.report_with_rng(text, use_heuristic_features, &mut rng)
    }

    /// Summarize a document using the caller's random source.
    pub fn report_with_rng(
        &self,
        text: &str,
        use_heuristic_features: bool,
        rng: &mut dyn RngCore,
    ) -> Result<SummaryReport> {
        self.config.validate()?;

        if text.trim().is_empty() {
            return Ok(SummaryReport::empty(self.config.separator.clone()));
        }

        let sentences = self
            .annotator
            .annotate(text, &Capability::for_summary())
            .map_err(|e| {
                warn!(error = %e, "Annotation failed");
                e
            })?;

        let scorer = scoring_for(use_heuristic_features, &self.config.features);
        let configured;
        let classifier: &dyn ClassificationStrategy = match &self.classifier {
            Some(custom) => custom.as_ref(),
            None => {
                configured = classification_for(&self.config.classifier);
                configured.as_ref()
            }
        };

        let report = summarize_sentences(
            &sentences,
            scorer.as_ref(),
            classifier,
            &self.config,
            rng,
        );

        info!(
            sentence_count = sentences.len(),
            selected = report.selected.len(),
            indicative = report.summary.len(),
            heuristic = use_heuristic_features,
            "Generated extractive summary"
        );

        Ok(report)
    }
}

/// Run every stage over already-annotated sentences.
pub fn summarize_sentences(
    sentences: &[Sentence],
    scorer: &dyn ScoringStrategy,
    classifier: &dyn ClassificationStrategy,
    config: &SummarizerConfig,
    rng: &mut dyn RngCore,
) -> SummaryReport {
    let scored = score_sentences(sentences, scorer, rng);
    let ranked = rank_sentences(scored);
    let selected = select_top(ranked.clone(), config.max_sentences);
    let indicative = classify_indicative(selected.clone(), classifier, rng);

    SummaryReport {
        ranked,
        selected,
        summary: Summary::new(indicative, config.separator.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AnnotationError, SummarizerError};
    use crate::testing::{FixedClassifier, MockAnnotator};
    use crate::types::config::ClassifierConfig;
    use crate::types::summary::TITLE_SENTINEL;

    fn ticket() -> Vec<Sentence> {
        [
            "Printer queue stuck",
            "The printer queue on floor two is stuck again.",
            "Restarting the spooler did nothing.",
            "In summary, nobody can print.",
        ]
        .into_iter()
        .map(Sentence::from_text)
        .collect()
    }

    #[test]
    fn test_empty_text_skips_annotator() {
        let annotator = MockAnnotator::new();
        let summarizer = Summarizer::new(annotator.clone(), SummarizerConfig::default()).unwrap();

        assert_eq!(summarizer.summarize("", true).unwrap(), "");
        assert_eq!(summarizer.summarize("   \n", false).unwrap(), "");
        assert!(annotator.calls().is_empty());
    }

    #[test]
    fn test_requests_tokenize_and_split() {
        let annotator = MockAnnotator::new().with_sentences(ticket());
        let summarizer = Summarizer::new(annotator.clone(), SummarizerConfig::default()).unwrap();
        summarizer.summarize("anything", true).unwrap();

        let calls = annotator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].capabilities, Capability::for_summary());
    }

    #[test]
    fn test_annotation_failure_propagates() {
        let summarizer =
            Summarizer::new(MockAnnotator::failing("connection refused"), SummarizerConfig::default())
                .unwrap();
        let err = summarizer.summarize("Some text.", true).unwrap_err();
        assert!(matches!(
            err,
            SummarizerError::Annotation(AnnotationError::Unavailable(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected_before_annotation() {
        let annotator = MockAnnotator::new().with_sentences(ticket());
        let bad = SummarizerConfig::default()
            .with_classifier(ClassifierConfig::new().with_keep_probability(2.0));
        assert!(Summarizer::new(annotator.clone(), bad).is_err());

        let mut summarizer = Summarizer::new(annotator.clone(), SummarizerConfig::default()).unwrap();
        summarizer.config_mut().classifier.keep_probability = -1.0;
        let err = summarizer.summarize("text", true).unwrap_err();
        assert!(matches!(err, SummarizerError::InvalidConfiguration { .. }));
        assert!(annotator.calls().is_empty());
    }

    #[test]
    fn test_title_always_in_summary() {
        let summarizer = Summarizer::new(
            MockAnnotator::new().with_sentences(ticket()),
            SummarizerConfig::default(),
        )
        .unwrap();

        for _ in 0..20 {
            let report = summarizer.report("ticket", true).unwrap();
            assert_eq!(report.ranked[0].score, TITLE_SENTINEL);
            assert_eq!(report.selected[0].position, 1);
            assert_eq!(report.summary.sentences[0].position, 1);
        }
    }

    #[test]
    fn test_custom_classifier_replaces_coin_flip() {
        let summarizer = Summarizer::new(
            MockAnnotator::new().with_sentences(ticket()),
            SummarizerConfig::default(),
        )
        .unwrap()
        .with_classifier(Box::new(FixedClassifier::keep_all()));

        let report = summarizer.report("ticket", true).unwrap();
        assert_eq!(report.summary.sentences, report.selected);
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = SummarizerConfig::default().with_seed(2024);
        let summarizer =
            Summarizer::new(MockAnnotator::new().with_sentences(ticket()), config).unwrap();

        let first = summarizer.summarize("ticket", false).unwrap();
        for _ in 0..5 {
            assert_eq!(summarizer.summarize("ticket", false).unwrap(), first);
        }
    }
}
