//! Built-in scoring and classification strategies.
//!
//! - [`RandomStrategy`] - uniform random scores and coin-flip classification
//! - [`HeuristicStrategy`] - deterministic feature-sum scoring
//! - [`ThresholdStrategy`] - keep sentences whose relative score clears a bar

pub mod heuristic;
pub mod random;
pub mod threshold;

pub use heuristic::HeuristicStrategy;
pub use random::RandomStrategy;
pub use threshold::ThresholdStrategy;

use crate::traits::{classification::ClassificationStrategy, scoring::ScoringStrategy};
use crate::types::config::{ClassifierConfig, FeatureWeights};

/// Pick the scorer for the `use_heuristic_features` flag.
pub fn scoring_for(use_heuristic_features: bool, weights: &FeatureWeights) -> Box<dyn ScoringStrategy> {
    if use_heuristic_features {
        Box::new(HeuristicStrategy::new(weights.clone()))
    } else {
        Box::new(RandomStrategy::new())
    }
}

/// Pick the classifier for the configured flags.
///
/// `use_heuristic_classification` has no deterministic counterpart yet, so
/// both values resolve to the coin-flip classifier.
pub fn classification_for(config: &ClassifierConfig) -> Box<dyn ClassificationStrategy> {
    Box::new(RandomStrategy::new().with_keep_probability(config.keep_probability))
}
