//! Sentence and token types produced by an annotator.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One word-level unit of a sentence.
///
/// Tags are optional: a tokenizer-only annotator leaves them empty, a full
/// NLP annotator fills them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The word as it appears in the text
    pub word: String,

    /// Part-of-speech tag (e.g. "NNP")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    /// Named-entity tag (e.g. "PERSON"); "O" means outside any entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_entity: Option<String>,
}

impl Token {
    /// Create an untagged token.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            part_of_speech: None,
            named_entity: None,
        }
    }

    /// Set the part-of-speech tag.
    pub fn with_part_of_speech(mut self, tag: impl Into<String>) -> Self {
        self.part_of_speech = Some(tag.into());
        self
    }

    /// Set the named-entity tag.
    pub fn with_named_entity(mut self, tag: impl Into<String>) -> Self {
        self.named_entity = Some(tag.into());
        self
    }
}

/// One segmented sentence of a document.
///
/// Sentences are read-only once built; their position in the document comes
/// from the order the annotator returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment: Option<String>,
}

impl Sentence {
    /// Create a sentence from its text and tokens.
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
            sentiment: None,
        }
    }

    /// Create a sentence tokenized on whitespace.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = text.split_whitespace().map(Token::new).collect();
        Self::new(text, tokens)
    }

    /// Attach a sentiment label.
    pub fn with_sentiment(mut self, label: impl Into<String>) -> Self {
        self.sentiment = Some(label.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn sentiment(&self) -> Option<&str> {
        self.sentiment.as_deref()
    }

    /// Number of tokens in the sentence.
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An annotation a caller can request from an annotator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Tokenize,
    SentenceSplit,
    PartOfSpeech,
    Lemma,
    NamedEntityRecognition,
    ParseTree,
    Sentiment,
    /// Regex-NER over a user dictionary file
    CustomEntityDictionary(PathBuf),
}

impl Capability {
    /// Capabilities the summarization pipeline needs.
    pub fn for_summary() -> Vec<Capability> {
        vec![Capability::Tokenize, Capability::SentenceSplit]
    }

    /// Capabilities the ticket analyzer needs.
    pub fn for_analysis(dictionary: Option<PathBuf>) -> Vec<Capability> {
        let mut capabilities = vec![
            Capability::Tokenize,
            Capability::SentenceSplit,
            Capability::PartOfSpeech,
            Capability::Lemma,
            Capability::NamedEntityRecognition,
            Capability::ParseTree,
            Capability::Sentiment,
        ];
        if let Some(path) = dictionary {
            capabilities.push(Capability::CustomEntityDictionary(path));
        }
        capabilities
    }

    /// Stable name of the capability.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Tokenize => "tokenize",
            Capability::SentenceSplit => "sentence-split",
            Capability::PartOfSpeech => "part-of-speech",
            Capability::Lemma => "lemma",
            Capability::NamedEntityRecognition => "named-entity-recognition",
            Capability::ParseTree => "parse-tree",
            Capability::Sentiment => "sentiment",
            Capability::CustomEntityDictionary(_) => "custom-entity-dictionary",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::CustomEntityDictionary(path) => {
                write!(f, "{}({})", self.name(), path.display())
            }
            other => f.write_str(other.name()),
        }
    }
}
