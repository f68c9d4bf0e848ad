//! Collaborator traits for the settings store and the dictionary command interface.
//!
//! Both are treated as opaque: implementations may be local or remote.

use async_trait::async_trait;
use serde_json::Value;

/// Error types for settings store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The store did not accept the write
    #[error("Failed to write setting '{0}': {1}")]
    WriteFailed(String, String),
    /// The authoritative snapshot could not be fetched
    #[error("Failed to refresh settings: {0}")]
    RefreshFailed(String),
}

/// Non-ok results from the dictionary command interface
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// Dictionary with this ID does not exist
    #[error("Dictionary with ID {0} not found")]
    NotFound(String),
    /// Dictionary with this ID already exists
    #[error("Dictionary with ID {0} already exists")]
    DuplicateId(String),
    /// The backend refused the command
    #[error("Dictionary command rejected: {0}")]
    Rejected(String),
}

/// Settings store holding the last-known snapshot of all settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a value from the last-known snapshot.
    fn get_setting(&self, key: &str) -> Option<Value>;

    /// Write a value locally and to the persisted store.
    ///
    /// Resolves when the store acknowledges the write.
    async fn update_setting(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Replace the snapshot with the store's authoritative state.
    async fn refresh_settings(&self) -> Result<(), StoreError>;
}

/// Commands that create and mutate imported dictionaries.
#[async_trait]
pub trait DictionaryCommands: Send + Sync {
    /// Create a dictionary; new dictionaries start enabled.
    async fn add_dictionary(
        &self,
        id: &str,
        name: &str,
        words: &[String],
    ) -> Result<(), CommandError>;

    /// Set the enabled flag of a dictionary.
    async fn toggle_dictionary(&self, id: &str, enabled: bool) -> Result<(), CommandError>;

    /// Delete a dictionary. Unknown IDs are not an error.
    async fn remove_dictionary(&self, id: &str) -> Result<(), CommandError>;
}
