// Dictionary collection manager - toggle and remove imported dictionaries
//
// Word lists of an imported dictionary are never edited after import.

use std::sync::Arc;

use crate::settings::{
    DictionaryCommands, SettingsStore, SettingsSync, SyncError, CUSTOM_DICTIONARIES,
};
use crate::vocabulary::CustomDictionary;

/// Manages imported dictionaries stored under `custom_dictionaries`
pub struct DictionaryManager<S, C> {
    sync: Arc<SettingsSync<S>>,
    commands: Arc<C>,
}

impl<S: SettingsStore, C: DictionaryCommands> DictionaryManager<S, C> {
    pub fn new(sync: Arc<SettingsSync<S>>, commands: Arc<C>) -> Self {
        Self { sync, commands }
    }

    /// All imported dictionaries from the settings snapshot
    pub fn dictionaries(&self) -> Vec<CustomDictionary> {
        self.sync.read(CUSTOM_DICTIONARIES)
    }

    /// Get a dictionary by ID
    pub fn get(&self, id: &str) -> Option<CustomDictionary> {
        self.dictionaries().into_iter().find(|d| d.id == id)
    }

    /// Whether toggle/remove may be issued now
    pub fn can_edit(&self) -> bool {
        !self.sync.is_updating(CUSTOM_DICTIONARIES)
    }

    /// Set whether a dictionary is enabled
    pub async fn toggle_enabled(&self, id: &str, enabled: bool) -> Result<(), SyncError> {
        self.sync
            .submit(
                CUSTOM_DICTIONARIES,
                self.commands.toggle_dictionary(id, enabled),
            )
            .await?;
        crate::info!("Set dictionary {} enabled={}", id, enabled);
        Ok(())
    }

    /// Delete a dictionary
    pub async fn remove(&self, id: &str) -> Result<(), SyncError> {
        self.sync
            .submit(CUSTOM_DICTIONARIES, self.commands.remove_dictionary(id))
            .await?;
        crate::info!("Removed dictionary {}", id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "dictionaries_test.rs"]
mod tests;
