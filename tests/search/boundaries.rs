//! Word boundary semantics: letters, digits, `_` and `-` glue; everything
//! else separates.

use crate::common::{fixture_engine, make_corpus, result_urls};
use postsearch::{is_word_char, Matcher, SearchEngine};

#[test]
fn test_substring_inside_word_is_rejected() {
    // "concatenating" and "cat-like" contain "cat" but never standalone
    let engine = fixture_engine();
    assert_eq!(result_urls(&engine, "cat"), vec!["/2024/03/cat-and-code/"]);
}

#[test]
fn test_hyphen_counts_as_word_character() {
    let engine = SearchEngine::new(make_corpus(&[
        ("Hyphenated", "a rust-colored theme"),
        ("Spaced", "a rust colored theme"),
    ]));
    assert_eq!(result_urls(&engine, "rust"), vec!["/posts/spaced/"]);
}

#[test]
fn test_underscore_and_digits_glue() {
    let engine = SearchEngine::new(make_corpus(&[
        ("Snake", "call my_rust_fn here"),
        ("Version", "rust2024 edition"),
        ("Plain", "(rust)"),
    ]));
    assert_eq!(result_urls(&engine, "rust"), vec!["/posts/plain/"]);
}

#[test]
fn test_punctuation_separates() {
    let matcher = Matcher::new("rust").unwrap();
    for text in ["rust.", "\"rust\"", "/rust/", "rust!", "rust's", "[rust]"] {
        assert!(matcher.is_match(text), "expected standalone match in {:?}", text);
    }
}

#[test]
fn test_metacharacters_are_literal() {
    let engine = fixture_engine();
    assert_eq!(result_urls(&engine, "c++"), vec!["/2024/04/regex-pitfalls/"]);
    assert_eq!(result_urls(&engine, "(.*)"), vec!["/2024/04/regex-pitfalls/"]);
}

#[test]
fn test_rejected_candidate_does_not_hide_later_match() {
    // The first '+' is glued to 'C'; the second is standalone.
    let matcher = Matcher::new("+").unwrap();
    assert_eq!(matcher.find("C++ x"), Some(2..3));
}

#[test]
fn test_non_ascii_letters_are_not_word_characters() {
    assert!(!is_word_char('é'));
    let matcher = Matcher::new("cafe").unwrap();
    assert!(matcher.is_match("écafeé"));
}
