// Dictionary import pipeline
//
// parse -> filter (whitespace and length only) -> add-dictionary command -> refresh.
// Files with no surviving words never reach the command interface.

use std::path::Path;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::VocabularyConfig;
use crate::settings::{DictionaryCommands, SettingsStore, SettingsSync, CUSTOM_DICTIONARIES};
use crate::vocabulary::{parse_words_from_file, WordRules};

/// File extensions accepted for import
const ACCEPTED_EXTENSIONS: [&str; 2] = ["txt", "json"];

/// Result of an import attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// A dictionary was created with `count` words
    Success { count: usize, name: String },
    /// No word survived filtering; the store was not contacted
    Empty,
    /// The file could not be read or the store refused the dictionary
    Error(String),
}

/// Errors at the file boundary, before parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    /// Only .txt and .json files are imported
    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(String),
    /// Failed to read the file content
    #[error("Failed to read file: {0}")]
    Read(String),
}

/// Imports uploaded word lists as named dictionaries
pub struct DictionaryImporter<S, C> {
    sync: Arc<SettingsSync<S>>,
    commands: Arc<C>,
    rules: WordRules,
    id_prefix: String,
}

impl<S: SettingsStore, C: DictionaryCommands> DictionaryImporter<S, C> {
    pub fn new(sync: Arc<SettingsSync<S>>, commands: Arc<C>) -> Self {
        Self::with_config(sync, commands, &VocabularyConfig::default())
    }

    pub fn with_config(
        sync: Arc<SettingsSync<S>>,
        commands: Arc<C>,
        config: &VocabularyConfig,
    ) -> Self {
        Self {
            sync,
            commands,
            rules: config.word_rules(),
            id_prefix: config.dictionary_id_prefix.clone(),
        }
    }

    /// Whether a new import may be started (no dictionary change in flight)
    pub fn can_import(&self) -> bool {
        !self.sync.is_updating(CUSTOM_DICTIONARIES)
    }

    /// Keep words without whitespace and within the length limit
    ///
    /// Duplicates are kept; uniqueness is not enforced across or within dictionaries.
    pub fn filter_words(&self, words: Vec<String>) -> Vec<String> {
        words
            .into_iter()
            .filter(|word| self.rules.is_importable(word))
            .collect()
    }

    /// Fresh dictionary ID: prefix, unix millis, and a random suffix
    pub fn generate_id(&self) -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!(
            "{}{}_{}",
            self.id_prefix,
            chrono::Utc::now().timestamp_millis(),
            &uuid[..8]
        )
    }

    /// Import already-read file content
    pub async fn import(&self, content: &str, filename: &str) -> ImportOutcome {
        let candidate = parse_words_from_file(content, filename);
        let parsed = candidate.words.len();
        let words = self.filter_words(candidate.words);

        if words.is_empty() {
            crate::info!("No valid words in {} ({} parsed)", filename, parsed);
            return ImportOutcome::Empty;
        }

        let id = self.generate_id();
        let name = candidate.name;
        let count = words.len();
        crate::debug!(
            "Importing {} of {} words from {} as {} ({})",
            count,
            parsed,
            filename,
            name,
            id
        );

        let result = self
            .sync
            .submit(
                CUSTOM_DICTIONARIES,
                self.commands.add_dictionary(&id, &name, &words),
            )
            .await;

        match result {
            Ok(()) => {
                crate::info!("Imported dictionary '{}' with {} words", name, count);
                ImportOutcome::Success { count, name }
            }
            Err(e) => {
                crate::warn!("Failed to import dictionary '{}': {}", name, e);
                ImportOutcome::Error(e.to_string())
            }
        }
    }

    /// Read a .txt or .json file in full and import it
    pub async fn import_file(&self, path: &Path) -> ImportOutcome {
        match read_import_file(path).await {
            Ok((content, filename)) => self.import(&content, &filename).await,
            Err(e) => {
                crate::warn!("Failed to import {:?}: {}", path, e);
                ImportOutcome::Error(e.to_string())
            }
        }
    }
}

/// Whether `filename` has an extension accepted for import
pub fn is_accepted_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

async fn read_import_file(path: &Path) -> Result<(String, String), ImportError> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();

    if !is_accepted_file(&filename) {
        return Err(ImportError::UnsupportedExtension(filename));
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ImportError::Read(e.to_string()))?;
    Ok((content, filename))
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
