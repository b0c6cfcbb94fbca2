//! Settings file combining ranking and tokenizer configuration

use anyhow::Context;
use passage_core::Config;
use passage_corpus::TokenizerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ranking: Config,
    pub tokenizer: TokenizerConfig,
}

impl Settings {
    /// Load from a JSON file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Apply command-line overrides
    pub fn with_matches(mut self, files: Option<usize>, sentences: Option<usize>) -> Self {
        if let Some(n) = files {
            self.ranking.file_matches = n;
        }
        if let Some(n) = sentences {
            self.ranking.sentence_matches = n;
        }
        self
    }
}
