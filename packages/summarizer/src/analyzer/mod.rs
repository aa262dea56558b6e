//! Ticket analysis: sentiment, entities and parts of speech per sentence.
//!
//! Sits beside the summarization pipeline and shares its annotator. Unlike
//! summarization it needs a tagging annotator (POS, NER, sentiment).

mod grouping;

pub use grouping::{group_entities, group_parts_of_speech};

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::Result;
use crate::traits::annotator::Annotator;
use crate::types::analysis::{SentenceAnalysis, TicketAnalysis};
use crate::types::sentence::{Capability, Sentence};

/// Default custom entity dictionary file name.
pub const DEFAULT_DICTIONARY: &str = "squelchDictionary.txt";

/// Analyzes support tickets through an annotator.
///
/// # Example
///
/// ```rust,ignore
/// let analyzer = TicketAnalyzer::new(CoreNlpAnnotator::default())
///     .with_dictionary("squelchDictionary.txt");
///
/// for ticket in analyzer.analyze_tickets(input.lines())? {
///     println!("{:?}", ticket);
/// }
/// ```
pub struct TicketAnalyzer<A: Annotator> {
    annotator: A,
    dictionary: Option<PathBuf>,
}

impl<A: Annotator> TicketAnalyzer<A> {
    pub fn new(annotator: A) -> Self {
        Self {
            annotator,
            dictionary: None,
        }
    }

    /// Add a regex-NER dictionary to the requested annotations.
    pub fn with_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary = Some(path.into());
        self
    }

    pub fn dictionary(&self) -> Option<&PathBuf> {
        self.dictionary.as_ref()
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    /// Analyze one ticket.
    pub fn analyze_ticket(&self, text: &str) -> Result<TicketAnalysis> {
        info!(ticket = %text, "Analyzing ticket");

        let sentences = self
            .annotator
            .annotate(text, &Capability::for_analysis(self.dictionary.clone()))
            .map_err(|e| {
                warn!(error = %e, "Annotation failed");
                e
            })?;

        let sentences = sentences.iter().map(analyze_sentence).collect();

        Ok(TicketAnalysis {
            text: text.to_string(),
            sentences,
        })
    }

    /// Analyze one ticket per line, skipping blank lines.
    ///
    /// Stops at the first annotation failure.
    pub fn analyze_tickets<'a>(
        &self,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<TicketAnalysis>> {
        lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.analyze_ticket(line))
            .collect()
    }
}

/// Break down one annotated sentence.
pub fn analyze_sentence(sentence: &Sentence) -> SentenceAnalysis {
    let analysis = SentenceAnalysis {
        text: sentence.text().to_string(),
        sentiment: sentence.sentiment().map(str::to_string),
        entities: group_entities(sentence.tokens()),
        parts_of_speech: group_parts_of_speech(sentence.tokens()),
    };

    info!(
        sentiment = analysis.sentiment.as_deref().unwrap_or("unknown"),
        sentence = %analysis.text,
        "Sentence sentiment"
    );
    for (tag, phrases) in &analysis.entities {
        info!(tag = %tag, phrases = ?phrases, "Named entities");
    }
    for (tag, words) in &analysis.parts_of_speech {
        info!(tag = %tag, words = ?words, "Part of speech");
    }

    analysis
}
