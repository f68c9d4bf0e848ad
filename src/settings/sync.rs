//! Optimistic update protocol over the settings store.
//!
//! Every mutation is admitted through the in-flight gate for its key, then
//! submitted and awaited. On acknowledgment the full snapshot is refreshed
//! before the key is released. On failure nothing is refreshed.
//!
//! There is no timeout: a mutation that never resolves keeps its key in flight.

use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use super::gate::InFlightGate;
use super::store::SettingsStore;

/// Error types for synchronized mutations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyncError {
    /// Another mutation for this key is still outstanding
    #[error("A change to '{0}' is already in progress")]
    Busy(String),
    /// The store or command interface returned a non-ok result
    #[error("Change was rejected: {0}")]
    Rejected(String),
    /// The change was acknowledged but the snapshot could not be refreshed
    #[error("Failed to refresh settings: {0}")]
    Refresh(String),
}

/// Map SyncError to user-friendly error messages
pub fn to_user_error(error: &SyncError) -> String {
    match error {
        SyncError::Busy(_) => "Please wait for the current change to finish".to_string(),
        SyncError::Rejected(msg) => format!("Failed to save change: {}", msg),
        SyncError::Refresh(msg) => format!("Saved, but failed to reload settings: {}", msg),
    }
}

/// Single authoritative access point to the settings snapshot
pub struct SettingsSync<S> {
    store: Arc<S>,
    gate: InFlightGate,
}

impl<S: SettingsStore> SettingsSync<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            gate: InFlightGate::new(),
        }
    }

    /// The underlying settings store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a mutation for `key` is awaiting acknowledgment
    pub fn is_updating(&self, key: &str) -> bool {
        self.gate.is_held(key)
    }

    /// Read `key` from the current snapshot
    ///
    /// Missing or unreadable values read as the type's default.
    pub fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get_setting(key) {
            None | Some(serde_json::Value::Null) => T::default(),
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                crate::warn!("Ignoring unreadable value for setting '{}': {}", key, e);
                T::default()
            }),
        }
    }

    /// Run `mutation` as the single outstanding change for `key`
    ///
    /// The mutation future is only polled after the key is admitted. On success
    /// the snapshot is refreshed before the key is released.
    pub async fn submit<F, E>(&self, key: &str, mutation: F) -> Result<(), SyncError>
    where
        F: Future<Output = Result<(), E>>,
        E: Display,
    {
        let _guard = match self.gate.try_acquire(key) {
            Some(guard) => guard,
            None => {
                crate::warn!("Refusing change to '{}': another change is in flight", key);
                return Err(SyncError::Busy(key.to_string()));
            }
        };

        if let Err(e) = mutation.await {
            crate::warn!("Change to '{}' was rejected: {}", key, e);
            return Err(SyncError::Rejected(e.to_string()));
        }

        self.store
            .refresh_settings()
            .await
            .map_err(|e| SyncError::Refresh(e.to_string()))?;

        crate::debug!("Change to '{}' acknowledged and snapshot refreshed", key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
