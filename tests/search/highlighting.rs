//! Highlighting of titles and snippets.

use crate::common::{fixture_engine, make_post};
use postsearch::{highlight_query, SearchEngine, SearchOptions};

#[test]
fn test_every_standalone_occurrence_is_marked() {
    let engine = fixture_engine();
    let outcome = engine.search("cat");
    let result = &outcome.results()[0];
    assert_eq!(result.highlighted_title, "My <mark>cat</mark> and my code");
    assert_eq!(result.highlighted_snippet.matches("<mark>cat</mark>").count(), 2);
}

#[test]
fn test_original_casing_is_kept() {
    let engine = fixture_engine();
    let outcome = engine.search("c++");
    let snippet = &outcome.results()[0].highlighted_snippet;
    assert!(snippet.contains("<mark>C++</mark> users"));
    assert!(snippet.contains("of <mark>c++</mark> in"));
}

#[test]
fn test_title_without_match_is_unchanged() {
    let engine = fixture_engine();
    let outcome = engine.search("c++");
    assert_eq!(outcome.results()[0].highlighted_title, "Regex pitfalls");
}

#[test]
fn test_highlight_query_normalizes_like_search() {
    let options = SearchOptions::default();
    assert_eq!(
        highlight_query("Rust and rust-lang", "  RUST ", &options),
        "<mark>Rust</mark> and rust-lang"
    );
    assert_eq!(highlight_query("Rust", "   ", &options), "Rust");
}

#[test]
fn test_custom_markers() {
    let options = SearchOptions::from_json(r#"{"markOpen": "[", "markClose": "]"}"#).unwrap();
    let engine = SearchEngine::with_options(vec![make_post("Rust notes", "")], options);
    let outcome = engine.search("rust");
    assert_eq!(outcome.results()[0].highlighted_title, "[Rust] notes");
}
