// Vocabulary module - word rules, dictionary types and the upload parser

mod parser;
mod types;
mod validator;

pub use parser::{base_name, parse_words_from_file, FileKind};
pub use types::{CustomDictionary, ImportCandidate, MAX_WORD_LENGTH};
pub use validator::{accept, is_importable, prepare_manual_word, WordRejection, WordRules};
