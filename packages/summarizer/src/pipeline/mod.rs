//! Summarization pipeline - the core of the library.
//!
//! The pipeline runs, in order:
//! - Scoring (random baseline or heuristic features)
//! - Ranking (stable descending sort)
//! - Selection (top-K)
//! - Indicative classification
//! - Rendering
//!
//! Every stage is a plain function over the previous stage's output.

pub mod classify;
pub mod rank;
pub mod render;
pub mod score;
pub mod select;
pub mod summarizer;

pub use classify::classify_indicative;
pub use rank::rank_sentences;
pub use render::render_summary;
pub use score::score_sentences;
pub use select::select_top;
pub use summarizer::{summarize_sentences, Summarizer};
