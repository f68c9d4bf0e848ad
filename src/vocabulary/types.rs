// Vocabulary types shared by the parser, the import pipeline and the managers

use serde::{Deserialize, Serialize};

/// Maximum number of characters in a custom word
pub const MAX_WORD_LENGTH: usize = 50;

fn default_enabled() -> bool {
    true
}

/// A named word list imported from a file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomDictionary {
    /// Unique identifier, generated at import time and never reused
    pub id: String,
    /// Display name (from the file name or the JSON `name` field)
    pub name: String,
    /// Words accepted at import time
    #[serde(default)]
    pub words: Vec<String>,
    /// Whether the dictionary currently contributes to recognition
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Result of parsing an uploaded file, before any word filtering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCandidate {
    pub words: Vec<String>,
    pub name: String,
}
