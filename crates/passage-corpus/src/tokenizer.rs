//! Word tokenizer with lowercase normalization and stopword filtering

use crate::stopwords::Stopwords;
use passage_core::Tokenizer;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    // Contractions like "don't" stay whole so they can match the stopword list
    WORD_RE.get_or_init(|| Regex::new(r"\w+(?:'\w+)*").expect("word pattern is valid"))
}

/// Endings split off a word after an apostrophe ("python's", "they'll", "can't")
const CLITICS: &[&str] = &["s", "t", "d", "m", "re", "ve", "ll"];

fn strip_clitic(word: &str) -> &str {
    match word.rsplit_once('\'') {
        Some((stem, ending)) if CLITICS.contains(&ending) => stem,
        _ => word,
    }
}

/// Tokenizer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Drop words from the English stopword list
    pub use_default_stopwords: bool,

    /// Additional words to drop
    pub extra_stopwords: Vec<String>,

    /// Shortest token kept, in characters
    pub min_length: usize,
}

impl TokenizerConfig {
    pub fn new() -> Self {
        Self {
            use_default_stopwords: true,
            extra_stopwords: Vec::new(),
            min_length: 1,
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct StopwordTokenizer {
    stopwords: Stopwords,
    min_length: usize,
}

impl StopwordTokenizer {
    pub fn new(config: &TokenizerConfig) -> Self {
        let mut stopwords = if config.use_default_stopwords {
            Stopwords::english()
        } else {
            Stopwords::empty()
        };
        stopwords.extend(&config.extra_stopwords);
        Self::with_stopwords(stopwords, config.min_length)
    }

    pub fn with_stopwords(stopwords: Stopwords, min_length: usize) -> Self {
        Self {
            stopwords,
            min_length,
        }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }
}

impl Default for StopwordTokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}

impl Tokenizer for StopwordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");
        word_re()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| !self.stopwords.contains(word))
            .map(strip_clitic)
            .filter(|word| word.chars().any(char::is_alphanumeric))
            .filter(|word| word.chars().count() >= self.min_length)
            .filter(|word| !self.stopwords.contains(word))
            .map(str::to_string)
            .collect()
    }
}
