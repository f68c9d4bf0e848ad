// Tests for the upload parser
// Test cases:
// - Plain text: comments and blank lines dropped, lines trimmed, order kept
// - JSON flat list, `words` object and category map shapes
// - `name` overrides the base name; underscore keys are skipped
// - Malformed JSON degrades to an empty candidate
// - Extension matching is case-insensitive

use super::*;

#[test]
fn test_plain_text_skips_comments_and_blank_lines() {
    let candidate = parse_words_from_file("alpha\n#comment\n\nbeta", "words.txt");
    assert_eq!(candidate.words, vec!["alpha", "beta"]);
    assert_eq!(candidate.name, "words");
}

#[test]
fn test_plain_text_trims_lines_and_handles_crlf() {
    let candidate = parse_words_from_file("  one  \r\ntwo\r\n   # indented comment\r\n", "list.TXT");
    assert_eq!(candidate.words, vec!["one", "two"]);
    assert_eq!(candidate.name, "list");
}

#[test]
fn test_plain_text_keeps_multi_word_lines_for_the_validator() {
    let candidate = parse_words_from_file("two words\nsingle", "notes.txt");
    assert_eq!(candidate.words, vec!["two words", "single"]);
}

#[test]
fn test_unknown_extension_is_plain_text() {
    let candidate = parse_words_from_file("[\"x\"]", "words.csv");
    assert_eq!(candidate.words, vec!["[\"x\"]"]);
    assert_eq!(candidate.name, "words.csv");
}

#[test]
fn test_json_flat_list() {
    let candidate = parse_words_from_file(r#"["x","y"]"#, "list.json");
    assert_eq!(candidate.words, vec!["x", "y"]);
    assert_eq!(candidate.name, "list");
}

#[test]
fn test_json_flat_list_drops_non_strings() {
    let candidate = parse_words_from_file(r#"["x", 1, null, {"a":1}, ["y"], "z"]"#, "mixed.json");
    assert_eq!(candidate.words, vec!["x", "z"]);
}

#[test]
fn test_json_words_object_with_name() {
    let candidate = parse_words_from_file(
        r#"{"name":"Custom","words":["a","b b","c"]}"#,
        "upload.json",
    );
    assert_eq!(candidate.words, vec!["a", "b b", "c"]);
    assert_eq!(candidate.name, "Custom");
}

#[test]
fn test_json_words_object_without_name_uses_base_name() {
    let candidate = parse_words_from_file(r#"{"words":["a", 2, "b"]}"#, "Medical.JSON");
    assert_eq!(candidate.words, vec!["a", "b"]);
    assert_eq!(candidate.name, "Medical");
}

#[test]
fn test_json_category_map() {
    let content = r#"{
        "name": "Dev Terms",
        "_comment": ["ignored"],
        "languages": ["rust", "zig"],
        "tools": ["cargo", 3, "rustup"],
        "version": 2
    }"#;
    let candidate = parse_words_from_file(content, "dev.json");
    assert_eq!(candidate.words, vec!["rust", "zig", "cargo", "rustup"]);
    assert_eq!(candidate.name, "Dev Terms");
}

#[test]
fn test_json_category_map_numeric_keys_come_first() {
    let content = r#"{"b": ["bee"], "10": ["ten"], "a": ["ay"], "2": ["two"], "02": ["oh-two"]}"#;
    let candidate = parse_words_from_file(content, "levels.json");
    assert_eq!(candidate.words, vec!["two", "ten", "bee", "ay", "oh-two"]);
}

#[test]
fn test_json_words_field_not_a_list_falls_through_to_categories() {
    let candidate = parse_words_from_file(r#"{"words":"nope","extra":["kept"]}"#, "odd.json");
    assert_eq!(candidate.words, vec!["kept"]);
    assert_eq!(candidate.name, "odd");
}

#[test]
fn test_json_empty_name_keeps_base_name() {
    let candidate = parse_words_from_file(r#"{"name":"","words":["a"]}"#, "base.json");
    assert_eq!(candidate.name, "base");
}

#[test]
fn test_json_scalar_yields_no_words() {
    let candidate = parse_words_from_file("42", "number.json");
    assert!(candidate.words.is_empty());
    assert_eq!(candidate.name, "number");
}

#[test]
fn test_malformed_json_is_soft_failure() {
    let candidate = parse_words_from_file("{not json", "bad.json");
    assert_eq!(
        candidate,
        ImportCandidate {
            words: vec![],
            name: "bad".to_string(),
        }
    );
}

#[test]
fn test_base_name_strips_one_known_extension() {
    assert_eq!(base_name("words.txt"), "words");
    assert_eq!(base_name("words.Json"), "words");
    assert_eq!(base_name("archive.json.txt"), "archive.json");
    assert_eq!(base_name("words.md"), "words.md");
    assert_eq!(base_name("日本語.txt"), "日本語");
}

#[test]
fn test_file_kind_from_filename() {
    assert_eq!(FileKind::from_filename("a.JSON"), FileKind::Json);
    assert_eq!(FileKind::from_filename("a.txt"), FileKind::PlainText);
    assert_eq!(FileKind::from_filename("json"), FileKind::PlainText);
}
