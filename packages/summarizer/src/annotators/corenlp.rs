//! Stanford CoreNLP server annotator.
//!
//! Talks to a running CoreNLP server over its HTTP JSON API:
//! the document is POSTed as the request body and the annotators are
//! named in the `properties` query parameter.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{AnnotationError, AnnotationResult};
use crate::traits::annotator::Annotator;
use crate::types::sentence::{Capability, Sentence, Token};

/// Default CoreNLP server address.
pub const DEFAULT_CORENLP_URL: &str = "http://localhost:9000";

/// Blocking client for a Stanford CoreNLP server.
///
/// # Example
///
/// ```rust,ignore
/// use summarizer::annotators::CoreNlpAnnotator;
///
/// let annotator = CoreNlpAnnotator::new("http://localhost:9000")
///     .with_timeout(Duration::from_secs(120));
/// let sentences = annotator.annotate(text, &Capability::for_analysis(None))?;
/// ```
pub struct CoreNlpAnnotator {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Default for CoreNlpAnnotator {
    fn default() -> Self {
        Self::new(DEFAULT_CORENLP_URL)
    }
}

impl CoreNlpAnnotator {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Self::build_client(Duration::from_secs(60)),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Self::build_client(timeout);
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.client = client;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_client(timeout: Duration) -> reqwest::blocking::Client {
        reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client")
    }
}

impl Annotator for CoreNlpAnnotator {
    fn annotate(&self, text: &str, capabilities: &[Capability]) -> AnnotationResult<Vec<Sentence>> {
        let properties = build_properties(capabilities);
        debug!(
            base_url = %self.base_url,
            properties = %properties,
            text_len = text.len(),
            "CoreNLP annotate starting"
        );

        let response = self
            .client
            .post(format!("{}/", self.base_url))
            .query(&[("properties", properties.to_string())])
            .body(text.to_string())
            .send()
            .map_err(|e| {
                warn!(base_url = %self.base_url, error = %e, "CoreNLP request failed");
                AnnotationError::Unavailable(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            warn!(status = %status, error = %error_text, "CoreNLP server error");
            return Err(AnnotationError::Unavailable(
                format!("CoreNLP returned HTTP {}: {}", status, error_text).into(),
            ));
        }

        let body = response
            .text()
            .map_err(|e| AnnotationError::Unavailable(Box::new(e)))?;
        let sentences = parse_response(&body)?;

        debug!(sentence_count = sentences.len(), "CoreNLP annotate finished");
        Ok(sentences)
    }
}

/// CoreNLP annotator names for the requested capabilities, in request order.
pub fn annotator_names(capabilities: &[Capability]) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for capability in capabilities {
        let name = match capability {
            Capability::Tokenize => "tokenize",
            Capability::SentenceSplit => "ssplit",
            Capability::PartOfSpeech => "pos",
            Capability::Lemma => "lemma",
            Capability::NamedEntityRecognition => "ner",
            Capability::ParseTree => "parse",
            Capability::Sentiment => "sentiment",
            Capability::CustomEntityDictionary(_) => "regexner",
        };
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Server `properties` for a request.
pub fn build_properties(capabilities: &[Capability]) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "annotators".to_string(),
        Value::String(annotator_names(capabilities).join(",")),
    );
    properties.insert("outputFormat".to_string(), Value::String("json".to_string()));

    let dictionary = capabilities.iter().find_map(|c| match c {
        Capability::CustomEntityDictionary(path) => Some(path),
        _ => None,
    });
    if let Some(path) = dictionary {
        properties.insert(
            "regexner.mapping".to_string(),
            Value::String(path.display().to_string()),
        );
    }

    Value::Object(properties)
}

#[derive(Debug, Deserialize)]
struct CoreNlpDocument {
    #[serde(default)]
    sentences: Vec<CoreNlpSentence>,
}

#[derive(Debug, Deserialize)]
struct CoreNlpSentence {
    #[serde(default)]
    tokens: Vec<CoreNlpToken>,
    sentiment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoreNlpToken {
    word: String,
    original_text: Option<String>,
    before: Option<String>,
    pos: Option<String>,
    ner: Option<String>,
}

/// Parse a CoreNLP JSON document into sentences.
pub fn parse_response(body: &str) -> AnnotationResult<Vec<Sentence>> {
    let document: CoreNlpDocument = serde_json::from_str(body)
        .map_err(|e| AnnotationError::MalformedResponse(e.to_string()))?;

    Ok(document
        .sentences
        .into_iter()
        .map(|raw| {
            let text = rebuild_text(&raw.tokens);
            let tokens = raw
                .tokens
                .into_iter()
                .map(|t| Token {
                    word: t.word,
                    part_of_speech: t.pos,
                    named_entity: t.ner,
                })
                .collect();
            let sentence = Sentence::new(text, tokens);
            match raw.sentiment {
                Some(label) => sentence.with_sentiment(label),
                None => sentence,
            }
        })
        .collect())
}

/// Rebuild sentence text from tokens and the whitespace CoreNLP saw before each.
fn rebuild_text(tokens: &[CoreNlpToken]) -> String {
    let mut text = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            text.push_str(token.before.as_deref().unwrap_or(" "));
        }
        text.push_str(token.original_text.as_deref().unwrap_or(&token.word));
    }
    text
}
