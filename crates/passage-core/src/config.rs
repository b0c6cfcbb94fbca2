//! Configuration for the two-stage lookup

use serde::{Deserialize, Serialize};

/// How many results each stage keeps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Top documents handed to the sentence stage
    pub file_matches: usize,

    /// Top sentences returned as the answer
    pub sentence_matches: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.file_matches, 1);
        assert_eq!(config.sentence_matches, 1);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"sentence_matches": 3}"#).unwrap();
        assert_eq!(config.file_matches, 1);
        assert_eq!(config.sentence_matches, 3);
    }
}
