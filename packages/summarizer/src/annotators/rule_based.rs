//! Rule-based annotator: no external service required.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AnnotationError, AnnotationResult};
use crate::traits::annotator::Annotator;
use crate::types::sentence::{Capability, Sentence, Token};

/// Terminal punctuation (plus closing quotes/brackets) followed by
/// whitespace, or a blank line.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?]+["')\]]*\s+|\n[ \t]*\n"#).expect("Invalid sentence boundary regex")
});

/// Split text into trimmed, non-empty sentences.
///
/// Terminal punctuation stays with its sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        let end = boundary.start() + boundary.as_str().trim_end().len();
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = boundary.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Annotator offering only `tokenize` and `sentence-split`.
///
/// Tokens are whitespace-separated words with punctuation attached, which
/// is all the heuristic scorer needs. Tagging capabilities are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAnnotator;

impl RuleBasedAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for RuleBasedAnnotator {
    fn annotate(&self, text: &str, capabilities: &[Capability]) -> AnnotationResult<Vec<Sentence>> {
        if let Some(unsupported) = capabilities
            .iter()
            .find(|c| !matches!(c, Capability::Tokenize | Capability::SentenceSplit))
        {
            return Err(AnnotationError::UnsupportedCapability(unsupported.clone()));
        }

        let tokenize = capabilities.contains(&Capability::Tokenize);
        let pieces = if capabilities.contains(&Capability::SentenceSplit) {
            split_sentences(text)
        } else {
            Some(text.trim()).filter(|t| !t.is_empty()).into_iter().collect()
        };

        Ok(pieces
            .into_iter()
            .map(|piece| {
                let tokens = if tokenize {
                    piece.split_whitespace().map(Token::new).collect()
                } else {
                    Vec::new()
                };
                Sentence::new(piece, tokens)
            })
            .collect())
    }
}
