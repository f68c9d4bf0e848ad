// Custom vocabulary: word validation, dictionary import and settings synchronization

mod config;
mod import;
mod managers;
mod settings;
mod vocabulary;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use config::{ConfigError, VocabularyConfig};
pub use import::{is_accepted_file, DictionaryImporter, ImportError, ImportOutcome, ImportStatus};
pub use managers::{DictionaryManager, WordListManager};
pub use settings::{
    to_user_error, CommandError, DictionaryCommands, InFlightGate, InFlightGuard, MemorySettings,
    SettingsStore, SettingsSync, StoreError, SyncError, CUSTOM_DICTIONARIES, CUSTOM_WORDS,
};
pub use vocabulary::{
    accept, base_name, is_importable, parse_words_from_file, prepare_manual_word,
    CustomDictionary, FileKind, ImportCandidate, WordRejection, WordRules, MAX_WORD_LENGTH,
};
