// Custom word list manager - add, remove and clear individually entered words

use serde_json::Value;
use std::sync::Arc;

use crate::config::VocabularyConfig;
use crate::settings::{SettingsStore, SettingsSync, SyncError, CUSTOM_WORDS};
use crate::vocabulary::WordRules;

/// Manages the flat custom word list stored under `custom_words`
pub struct WordListManager<S> {
    sync: Arc<SettingsSync<S>>,
    rules: WordRules,
}

impl<S: SettingsStore> WordListManager<S> {
    pub fn new(sync: Arc<SettingsSync<S>>) -> Self {
        Self::with_config(sync, &VocabularyConfig::default())
    }

    pub fn with_config(sync: Arc<SettingsSync<S>>, config: &VocabularyConfig) -> Self {
        Self {
            sync,
            rules: config.word_rules(),
        }
    }

    /// Current words from the settings snapshot, in insertion order
    pub fn words(&self) -> Vec<String> {
        self.sync.read(CUSTOM_WORDS)
    }

    /// Whether remove/clear may be issued now
    pub fn can_edit(&self) -> bool {
        !self.sync.is_updating(CUSTOM_WORDS)
    }

    /// Whether the add action should be enabled for `input`
    ///
    /// Uniqueness is not checked here; a duplicate is dropped silently by `add`.
    pub fn can_add(&self, input: &str) -> bool {
        self.can_edit() && self.rules.check_shape(input.trim()).is_ok()
    }

    /// Append a manually entered word
    ///
    /// Returns `Ok(false)` without writing if the word is rejected by validation.
    /// Returns `SyncError::Busy` if a change to the list is still in flight.
    pub async fn add(&self, input: &str) -> Result<bool, SyncError> {
        if !self.can_edit() {
            crate::warn!("Refusing to add word while '{}' is updating", CUSTOM_WORDS);
            return Err(SyncError::Busy(CUSTOM_WORDS.to_string()));
        }

        let mut words = self.words();
        let word = match self.rules.prepare_manual_word(input, &words) {
            Ok(word) => word,
            Err(reason) => {
                crate::debug!("Word not added: {}", reason);
                return Ok(false);
            }
        };

        words.push(word.clone());
        self.write(words).await?;
        crate::info!("Added custom word: {}", word);
        Ok(true)
    }

    /// Remove every exact occurrence of `word`
    pub async fn remove(&self, word: &str) -> Result<(), SyncError> {
        let words: Vec<String> = self.words().into_iter().filter(|w| w != word).collect();
        self.write(words).await?;
        crate::info!("Removed custom word: {}", word);
        Ok(())
    }

    /// Remove all words
    pub async fn clear(&self) -> Result<(), SyncError> {
        self.write(Vec::new()).await?;
        crate::info!("Cleared custom words");
        Ok(())
    }

    async fn write(&self, words: Vec<String>) -> Result<(), SyncError> {
        self.sync
            .submit(
                CUSTOM_WORDS,
                self.sync.store().update_setting(CUSTOM_WORDS, Value::from(words)),
            )
            .await
    }
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
