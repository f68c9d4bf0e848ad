//! Managers for the user's custom vocabulary.
//!
//! - `words`: the flat list of individually added words
//! - `dictionaries`: enable/disable and removal of imported dictionaries
//!
//! Both read the settings snapshot on every call and mutate only through
//! `SettingsSync`, so a refresh is always reflected in the next read.

mod dictionaries;
mod words;

pub use dictionaries::DictionaryManager;
pub use words::WordListManager;
