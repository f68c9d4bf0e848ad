//! Settings synchronization for custom vocabulary.
//!
//! This module provides the pieces every vocabulary mutation goes through:
//! - `store`: collaborator traits for the settings store and dictionary commands
//! - `gate`: per-key in-flight admission (one outstanding mutation per key)
//! - `sync`: submit, await acknowledgment, then refresh the full snapshot
//! - `memory`: in-process implementation of both collaborators

mod gate;
mod memory;
mod store;
mod sync;

pub use gate::{InFlightGate, InFlightGuard};
pub use memory::MemorySettings;
pub use store::{CommandError, DictionaryCommands, SettingsStore, StoreError};
pub use sync::{to_user_error, SettingsSync, SyncError};

/// Setting key holding the flat custom word list
pub const CUSTOM_WORDS: &str = "custom_words";

/// Setting key holding the imported dictionaries
pub const CUSTOM_DICTIONARIES: &str = "custom_dictionaries";
