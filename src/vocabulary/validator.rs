// Word validation - acceptability rules for custom words
//
// Rules, in order: trim and reject empty, reject interior whitespace,
// reject words longer than the max length, reject duplicates (flat word list only).
// Manual entry also strips markup characters after trimming.

use super::types::MAX_WORD_LENGTH;

/// Characters removed from manually entered words before they are stored
const MARKUP_CHARS: [char; 5] = ['<', '>', '"', '\'', '&'];

/// Reason a word was not accepted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordRejection {
    #[error("Word is empty")]
    Empty,
    #[error("Word '{0}' contains whitespace")]
    ContainsWhitespace(String),
    #[error("Word '{0}' is longer than {1} characters")]
    TooLong(String, usize),
    #[error("Word '{0}' is already in the list")]
    Duplicate(String),
}

/// Configurable limits applied by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRules {
    pub max_length: usize,
}

impl Default for WordRules {
    fn default() -> Self {
        Self {
            max_length: MAX_WORD_LENGTH,
        }
    }
}

impl WordRules {
    /// Check the shape rules (non-empty, no whitespace, length) on an already trimmed word
    pub fn check_shape(&self, word: &str) -> Result<(), WordRejection> {
        if word.is_empty() {
            return Err(WordRejection::Empty);
        }
        if word.chars().any(char::is_whitespace) {
            return Err(WordRejection::ContainsWhitespace(word.to_string()));
        }
        if word.chars().count() > self.max_length {
            return Err(WordRejection::TooLong(word.to_string(), self.max_length));
        }
        Ok(())
    }

    /// Full check for the flat word list: shape rules plus uniqueness against `existing`
    pub fn check(&self, word: &str, existing: &[String]) -> Result<String, WordRejection> {
        self.check_trimmed(word.trim(), existing)
    }

    /// Shape and uniqueness checks on a word taken as-is, without trimming
    fn check_trimmed(&self, word: &str, existing: &[String]) -> Result<String, WordRejection> {
        self.check_shape(word)?;
        if existing.iter().any(|w| w == word) {
            return Err(WordRejection::Duplicate(word.to_string()));
        }
        Ok(word.to_string())
    }

    /// Whether an imported word may go into a dictionary
    ///
    /// Duplicates are allowed here: uniqueness only applies to the flat word list.
    pub fn is_importable(&self, word: &str) -> bool {
        self.check_shape(word).is_ok()
    }

    /// Trim, strip markup characters, then check the stripped word
    ///
    /// The stripped word is not trimmed again, so whitespace next to a removed
    /// character rejects it. Returns the word as it should be stored.
    pub fn prepare_manual_word(
        &self,
        input: &str,
        existing: &[String],
    ) -> Result<String, WordRejection> {
        let sanitized: String = input
            .trim()
            .chars()
            .filter(|c| !MARKUP_CHARS.contains(c))
            .collect();
        self.check_trimmed(&sanitized, existing)
    }
}

/// Whether `word` is acceptable for the flat word list given its current contents
pub fn accept(word: &str, existing: &[String]) -> bool {
    WordRules::default().check(word, existing).is_ok()
}

/// Whether an imported word passes the whitespace and length rules
pub fn is_importable(word: &str) -> bool {
    WordRules::default().is_importable(word)
}

/// Sanitize and validate a manually entered word with the default rules
pub fn prepare_manual_word(input: &str, existing: &[String]) -> Result<String, WordRejection> {
    WordRules::default().prepare_manual_word(input, existing)
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod tests;
