//! Dictionary configuration module.
//!
//! This module defines where the dictionary's words come from and how
//! suggestions are presented to front ends.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Words every new dictionary is seeded with.
pub const DEFAULT_SEED_WORDS: [&str; 9] = [
    "abc", "the", "thIS", "then", "that", "there", "than", "thief", "their",
];

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Words inserted at startup (case-folded on insertion)
    pub seed_words: Vec<String>,

    /// Optional file of whitespace-separated words inserted after the seed words
    pub word_file: Option<PathBuf>,

    /// Maximum number of suggestions shown per request (None for unlimited)
    pub max_suggestions: Option<usize>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            seed_words: DEFAULT_SEED_WORDS.iter().map(|w| w.to_string()).collect(),
            word_file: None,
            max_suggestions: None,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_suggestions".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        if let Some(path) = &self.word_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "word_file must not be an empty path".to_string(),
                ));
            }
        }

        Ok(())
    }
}
