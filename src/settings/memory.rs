// In-process settings store and dictionary command interface
//
// Keeps a local snapshot plus an authoritative map. Setting writes go to both;
// dictionary commands only touch the authoritative map, so their effect is
// visible after `refresh_settings`.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::HashMap;

use super::store::{CommandError, DictionaryCommands, SettingsStore, StoreError};
use super::CUSTOM_DICTIONARIES;
use crate::vocabulary::CustomDictionary;

/// Settings held in memory for a single process
#[derive(Debug, Default)]
pub struct MemorySettings {
    /// Last-known snapshot served to readers
    snapshot: RwLock<HashMap<String, Value>>,
    /// Authoritative state that refreshes copy from
    persisted: Mutex<HashMap<String, Value>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose snapshot and authoritative state start as `settings`
    pub fn with_settings(settings: HashMap<String, Value>) -> Self {
        Self {
            snapshot: RwLock::new(settings.clone()),
            persisted: Mutex::new(settings),
        }
    }

    /// Apply `edit` to the authoritative dictionary collection
    fn edit_dictionaries<T>(
        &self,
        edit: impl FnOnce(&mut Vec<CustomDictionary>) -> Result<T, CommandError>,
    ) -> Result<T, CommandError> {
        let mut persisted = self.persisted.lock();
        let mut dictionaries: Vec<CustomDictionary> = match persisted.get(CUSTOM_DICTIONARIES) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| CommandError::Rejected(e.to_string()))?,
        };

        let result = edit(&mut dictionaries)?;

        let value =
            serde_json::to_value(&dictionaries).map_err(|e| CommandError::Rejected(e.to_string()))?;
        persisted.insert(CUSTOM_DICTIONARIES.to_string(), value);
        Ok(result)
    }
}

#[async_trait]
impl SettingsStore for MemorySettings {
    fn get_setting(&self, key: &str) -> Option<Value> {
        self.snapshot.read().get(key).cloned()
    }

    async fn update_setting(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.persisted.lock().insert(key.to_string(), value.clone());
        self.snapshot.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn refresh_settings(&self) -> Result<(), StoreError> {
        let authoritative = self.persisted.lock().clone();
        *self.snapshot.write() = authoritative;
        Ok(())
    }
}

#[async_trait]
impl DictionaryCommands for MemorySettings {
    async fn add_dictionary(
        &self,
        id: &str,
        name: &str,
        words: &[String],
    ) -> Result<(), CommandError> {
        self.edit_dictionaries(|dictionaries| {
            if dictionaries.iter().any(|d| d.id == id) {
                return Err(CommandError::DuplicateId(id.to_string()));
            }
            dictionaries.push(CustomDictionary {
                id: id.to_string(),
                name: name.to_string(),
                words: words.to_vec(),
                enabled: true,
            });
            Ok(())
        })
    }

    async fn toggle_dictionary(&self, id: &str, enabled: bool) -> Result<(), CommandError> {
        self.edit_dictionaries(|dictionaries| {
            let dictionary = dictionaries
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| CommandError::NotFound(id.to_string()))?;
            dictionary.enabled = enabled;
            Ok(())
        })
    }

    async fn remove_dictionary(&self, id: &str) -> Result<(), CommandError> {
        self.edit_dictionaries(|dictionaries| {
            dictionaries.retain(|d| d.id != id);
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
