use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub corenlp_url: Option<String>,
    pub seed: Option<u64>,
    pub max_sentences: Option<usize>,
    pub separator: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, one variable name at a time
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            corenlp_url: lookup("CORENLP_URL").filter(|url| !url.trim().is_empty()),
            seed: lookup("SUMMARIZER_SEED")
                .map(|v| v.parse())
                .transpose()
                .context("SUMMARIZER_SEED must be a valid number")?,
            max_sentences: lookup("SUMMARIZER_MAX_SENTENCES")
                .map(|v| v.parse())
                .transpose()
                .context("SUMMARIZER_MAX_SENTENCES must be a valid number")?,
            separator: lookup("SUMMARIZER_SEPARATOR"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment() {
        let config = load(&[]).unwrap();
        assert!(config.corenlp_url.is_none());
        assert!(config.seed.is_none());
        assert!(config.max_sentences.is_none());
        assert!(config.separator.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            ("CORENLP_URL", "http://nlp:9000"),
            ("SUMMARIZER_SEED", "42"),
            ("SUMMARIZER_MAX_SENTENCES", "3"),
            ("SUMMARIZER_SEPARATOR", " | "),
        ])
        .unwrap();
        assert_eq!(config.corenlp_url.as_deref(), Some("http://nlp:9000"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_sentences, Some(3));
        assert_eq!(config.separator.as_deref(), Some(" | "));
    }

    #[test]
    fn test_blank_corenlp_url_is_unset() {
        let config = load(&[("CORENLP_URL", "  ")]).unwrap();
        assert!(config.corenlp_url.is_none());
    }

    #[test]
    fn test_non_numeric_max_sentences_is_error() {
        let err = load(&[("SUMMARIZER_MAX_SENTENCES", "ten")]).unwrap_err();
        assert!(err.to_string().contains("SUMMARIZER_MAX_SENTENCES"));
    }

    #[test]
    fn test_non_numeric_seed_is_error() {
        let err = load(&[("SUMMARIZER_SEED", "-1")]).unwrap_err();
        assert!(err.to_string().contains("SUMMARIZER_SEED"));
    }
}
