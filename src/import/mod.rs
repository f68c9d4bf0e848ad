// Dictionary import - parse, filter and submit uploaded word lists

mod pipeline;
mod status;

pub use pipeline::{is_accepted_file, DictionaryImporter, ImportError, ImportOutcome};
pub use status::ImportStatus;
