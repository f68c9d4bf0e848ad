// Vocabulary configuration - limits and display timing loaded from a JSON file
//
// A missing file yields defaults; present fields override them individually.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::vocabulary::{WordRules, MAX_WORD_LENGTH};

/// Error types for configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Could not determine the config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// Failed to read or parse the config file
    #[error("Failed to load config: {0}")]
    LoadError(String),
}

fn default_max_word_length() -> usize {
    MAX_WORD_LENGTH
}

fn default_status_display_ms() -> u64 {
    3000
}

fn default_dictionary_id_prefix() -> String {
    "dict_".to_string()
}

/// Tunables for word validation and dictionary import
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyConfig {
    /// Maximum characters per word
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,
    /// How long an import status message stays visible
    #[serde(default = "default_status_display_ms")]
    pub status_display_ms: u64,
    /// Prefix for generated dictionary IDs
    #[serde(default = "default_dictionary_id_prefix")]
    pub dictionary_id_prefix: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            max_word_length: default_max_word_length(),
            status_display_ms: default_status_display_ms(),
            dictionary_id_prefix: default_dictionary_id_prefix(),
        }
    }
}

impl VocabularyConfig {
    /// Default location: `<config dir>/wordbank/vocabulary.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("wordbank").join("vocabulary.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        crate::debug!("Loading vocabulary config from {:?}", path);

        if !path.exists() {
            crate::debug!("No vocabulary config found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::LoadError(e.to_string()))?;

        crate::info!(
            "Loaded vocabulary config (max word length {})",
            config.max_word_length
        );
        Ok(config)
    }

    /// Validation rules derived from this config
    pub fn word_rules(&self) -> WordRules {
        WordRules {
            max_length: self.max_word_length,
        }
    }

    pub fn status_display_window(&self) -> Duration {
        Duration::from_millis(self.status_display_ms)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
