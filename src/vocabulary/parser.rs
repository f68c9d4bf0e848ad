// Upload parser - turns file content into an import candidate
//
// `.json` files are parsed as one of three shapes (flat list, `{ "words": [...] }`,
// or a map of category lists); anything else is read as one word per line.
// Individual words are not validated here.

use serde_json::{Map, Value};

use super::types::ImportCandidate;

/// How a file's content is interpreted, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Json,
    PlainText,
}

impl FileKind {
    pub fn from_filename(filename: &str) -> Self {
        if strip_extension(filename, ".json").is_some() {
            FileKind::Json
        } else {
            FileKind::PlainText
        }
    }
}

/// Shape of a parsed JSON document, resolved once in fallthrough order
#[derive(Debug)]
enum JsonShape {
    /// Top-level array of words
    List(Vec<Value>),
    /// Object with a `words` array
    Words { name: Option<String>, words: Vec<Value> },
    /// Object whose non-underscore keys hold arrays of words
    Categories { name: Option<String>, fields: Map<String, Value> },
    /// Any other JSON value
    Scalar,
}

impl JsonShape {
    fn resolve(value: Value) -> Self {
        match value {
            Value::Array(items) => JsonShape::List(items),
            Value::Object(mut fields) => {
                let name = match fields.get("name") {
                    Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
                    _ => None,
                };
                if matches!(fields.get("words"), Some(Value::Array(_))) {
                    if let Some(Value::Array(words)) = fields.remove("words") {
                        return JsonShape::Words { name, words };
                    }
                }
                JsonShape::Categories { name, fields }
            }
            _ => JsonShape::Scalar,
        }
    }

    fn into_candidate(self, base_name: String) -> ImportCandidate {
        match self {
            JsonShape::List(items) => ImportCandidate {
                words: strings_only(items),
                name: base_name,
            },
            JsonShape::Words { name, words } => ImportCandidate {
                words: strings_only(words),
                name: name.unwrap_or(base_name),
            },
            JsonShape::Categories { name, fields } => {
                let mut entries: Vec<(String, Value)> = fields.into_iter().collect();
                // Array-index keys come first in ascending order, the rest keep file order
                entries.sort_by_key(|(key, _)| array_index(key).unwrap_or(u32::MAX));
                let mut words = Vec::new();
                for (key, value) in entries {
                    if key.starts_with('_') {
                        continue;
                    }
                    if let Value::Array(items) = value {
                        words.extend(strings_only(items));
                    }
                }
                ImportCandidate {
                    words,
                    name: name.unwrap_or(base_name),
                }
            }
            JsonShape::Scalar => ImportCandidate {
                words: Vec::new(),
                name: base_name,
            },
        }
    }
}

/// Numeric value of a canonical array-index key ("0", "7", "42" but not "07")
fn array_index(key: &str) -> Option<u32> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&index| index != u32::MAX)
}

fn strings_only(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// `filename` without `ext` if it ends with it, ignoring ASCII case
fn strip_extension<'a>(filename: &'a str, ext: &str) -> Option<&'a str> {
    let split = filename.len().checked_sub(ext.len())?;
    if filename.is_char_boundary(split) && filename[split..].eq_ignore_ascii_case(ext) {
        Some(&filename[..split])
    } else {
        None
    }
}

/// File name with one trailing `.txt` or `.json` removed (case-insensitive)
pub fn base_name(filename: &str) -> String {
    strip_extension(filename, ".txt")
        .or_else(|| strip_extension(filename, ".json"))
        .unwrap_or(filename)
        .to_string()
}

fn parse_plain_text(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Parse uploaded file content into a candidate word list and dictionary name
///
/// Malformed JSON is not an error: it yields no words and the base name.
pub fn parse_words_from_file(content: &str, filename: &str) -> ImportCandidate {
    let base = base_name(filename);

    match FileKind::from_filename(filename) {
        FileKind::PlainText => ImportCandidate {
            words: parse_plain_text(content),
            name: base,
        },
        FileKind::Json => match serde_json::from_str::<Value>(content) {
            Ok(value) => {
                let shape = JsonShape::resolve(value);
                crate::debug!("Parsed {} as {}", filename, shape_label(&shape));
                shape.into_candidate(base)
            }
            Err(e) => {
                crate::debug!("Could not parse {} as JSON: {}", filename, e);
                ImportCandidate {
                    words: Vec::new(),
                    name: base,
                }
            }
        },
    }
}

fn shape_label(shape: &JsonShape) -> &'static str {
    match shape {
        JsonShape::List(_) => "list",
        JsonShape::Words { .. } => "words object",
        JsonShape::Categories { .. } => "category map",
        JsonShape::Scalar => "scalar",
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
