//! Configuration types for summarization.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SummarizerError};

/// Separator used between summary sentences.
pub const DEFAULT_SEPARATOR: &str = "+++++";

/// Default top-K.
pub const DEFAULT_MAX_SENTENCES: usize = 10;

/// Phrases that signal a sentence describes the document as a whole.
pub const DEFAULT_KEY_PHRASES: &[&str] = &[
    "introduction",
    "in summary",
    "to summarize",
    "in conclusion",
    "to conclude",
    "document describes",
];

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Configuration for the summarization pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Maximum sentences kept after ranking (top-K), at least 1.
    ///
    /// Default: 10.
    pub max_sentences: usize,

    /// String appended after every summary sentence.
    ///
    /// Default: "+++++".
    pub separator: String,

    /// Weights for the heuristic feature scorer.
    pub features: FeatureWeights,

    /// Indicative classification settings.
    pub classifier: ClassifierConfig,

    /// Seed for the per-call random source.
    ///
    /// When set, every call with the same input produces the same summary.
    /// When None, each call draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
            separator: DEFAULT_SEPARATOR.to_string(),
            features: FeatureWeights::default(),
            classifier: ClassifierConfig::default(),
            seed: None,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top-K.
    pub fn with_max_sentences(mut self, max: usize) -> Self {
        self.max_sentences = max;
        self
    }

    /// Set the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Put each summary sentence on its own line, followed by the marker.
    pub fn with_line_separator(mut self) -> Self {
        self.separator = format!("{}{}", LINE_ENDING, DEFAULT_SEPARATOR);
        self
    }

    /// Set the feature weights.
    pub fn with_features(mut self, features: FeatureWeights) -> Self {
        self.features = features;
        self
    }

    /// Set the classifier settings.
    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    /// Seed the random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every value, failing on the first one out of range.
    ///
    /// `max_sentences` must be at least 1 so the title always survives
    /// selection.
    pub fn validate(&self) -> Result<()> {
        if self.max_sentences == 0 {
            return Err(SummarizerError::invalid_config(
                "max_sentences must be at least 1",
            ));
        }
        self.features.validate()?;
        self.classifier.validate()
    }
}

/// Constants for the heuristic feature scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureWeights {
    /// A sentence needs strictly more tokens than this for `min_words_bonus`.
    pub min_words: usize,

    /// Positions strictly below this count as "near the start".
    pub top_few_count: usize,

    /// Positions strictly above `total - bottom_few_count` count as "near the end".
    pub bottom_few_count: usize,

    pub position_bonus: u32,
    pub key_phrase_bonus: u32,
    pub title_token_bonus: u32,
    pub min_words_bonus: u32,

    /// Case-insensitive trigger phrases, each worth `key_phrase_bonus`.
    pub key_phrases: Vec<String>,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            min_words: 3,
            top_few_count: 5,
            bottom_few_count: 5,
            position_bonus: 10,
            key_phrase_bonus: 10,
            title_token_bonus: 10,
            min_words_bonus: 20,
            key_phrases: DEFAULT_KEY_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl FeatureWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum word threshold.
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set how many leading and trailing positions get the position bonus.
    pub fn with_edge_counts(mut self, top_few: usize, bottom_few: usize) -> Self {
        self.top_few_count = top_few;
        self.bottom_few_count = bottom_few;
        self
    }

    /// Replace the key phrase list.
    pub fn with_key_phrases(mut self, phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.key_phrases = phrases.into_iter().map(|p| p.into()).collect();
        self
    }

    fn validate(&self) -> Result<()> {
        if let Some(index) = self.key_phrases.iter().position(|p| p.trim().is_empty()) {
            return Err(SummarizerError::invalid_config(format!(
                "key phrase #{} is empty",
                index + 1
            )));
        }
        Ok(())
    }
}

/// Settings for the indicative classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Request the heuristic classifier.
    ///
    /// Both values currently select the stochastic classifier; no
    /// deterministic classifier is implied by `true`.
    pub use_heuristic_classification: bool,

    /// Probability of keeping each sentence after the first.
    ///
    /// Default: 0.5.
    pub keep_probability: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            use_heuristic_classification: false,
            keep_probability: 0.5,
        }
    }
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heuristic_classification(mut self, enabled: bool) -> Self {
        self.use_heuristic_classification = enabled;
        self
    }

    pub fn with_keep_probability(mut self, probability: f64) -> Self {
        self.keep_probability = probability;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.keep_probability.is_finite() || !(0.0..=1.0).contains(&self.keep_probability) {
            return Err(SummarizerError::invalid_config(format!(
                "keep_probability must be within [0, 1], got {}",
                self.keep_probability
            )));
        }
        Ok(())
    }
}
