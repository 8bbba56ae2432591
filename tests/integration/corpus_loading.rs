//! Reading the corpus from disk and from readers.

use crate::common::FIXTURE_POSTS;
use postsearch::{load_corpus, read_corpus, Error, SearchOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_fixture_corpus_loads_in_order() {
    let posts = load_corpus(FIXTURE_POSTS).unwrap();
    assert_eq!(posts.len(), 6);
    assert_eq!(posts[0].filename, "2024-01-05-intro-to-rust.md");
    assert_eq!(posts[5].url, "/2024/06/deploy/");
}

#[test]
fn test_null_content_becomes_empty() {
    let posts = load_corpus(FIXTURE_POSTS).unwrap();
    assert_eq!(posts[4].title, "Notes without a body");
    assert_eq!(posts[4].content, "");
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = load_corpus(temp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_file_names_its_source() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("posts.json");
    fs::write(&path, r#"{"title": "not an array"}"#).unwrap();

    let err = load_corpus(&path).unwrap_err();
    match err {
        Error::Corpus { source_name, .. } => assert!(source_name.ends_with("posts.json")),
        other => panic!("expected corpus error, got {:?}", other),
    }
}

#[test]
fn test_read_corpus_from_reader() {
    let json = br#"[{"title": "From stdin", "content": "piped", "url": "/s", "filename": "s.md"}]"#;
    let posts = read_corpus(&json[..], "<stdin>").unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "From stdin");
}

#[test]
fn test_options_file_roundtrip_through_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("options.json");
    fs::write(&path, r#"{"contextBefore": 10, "ellipsis": "…"}"#).unwrap();

    let options = SearchOptions::from_path(&path).unwrap();
    assert_eq!(options.context_before, 10);
    assert_eq!(options.ellipsis, "…");
    assert_eq!(options.context_after, 70);
}
