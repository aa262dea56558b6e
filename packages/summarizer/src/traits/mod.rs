//! Core trait abstractions for the summarizer.
//!
//! These traits are the seams of the pipeline: where sentences come from,
//! how they are scored, and how the indicative subset is chosen.

pub mod annotator;
pub mod classification;
pub mod scoring;
