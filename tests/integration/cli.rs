//! The `postsearch` binary.

use crate::common::{FIXTURE_PAGE, FIXTURE_POSTS};
use std::process::Command;
use tempfile::TempDir;

fn postsearch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_postsearch"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_search_json_output() {
    let output = postsearch()
        .args(["search", FIXTURE_POSTS, "cat", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["url"], "/2024/03/cat-and-code/");
    assert_eq!(results[0]["highlightedTitle"], "My <mark>cat</mark> and my code");
}

#[test]
fn test_search_json_blank_query_is_null() {
    let output = postsearch()
        .args(["search", FIXTURE_POSTS, "  ", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
}

#[test]
fn test_search_text_no_results() {
    let output = postsearch()
        .args(["search", FIXTURE_POSTS, "java"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No matching posts found"));
}

#[test]
fn test_search_text_strips_markers() {
    let output = postsearch()
        .args(["search", FIXTURE_POSTS, "rust"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 results for \"rust\""));
    assert!(stdout.contains("Intro to Rust"));
    assert!(!stdout.contains("<mark>"));
}

#[test]
fn test_missing_corpus_fails() {
    let output = postsearch()
        .args(["search", "data/fixtures/missing.json", "rust"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.json"));
}

#[test]
fn test_snippets_writes_files() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let output = postsearch()
        .args(["snippets", FIXTURE_PAGE, "--output"])
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(out.join("code-snippet-1.txt").exists());
    assert!(out.join("code-snippet-2.txt").exists());
    assert!(!out.join("code-snippet-3.txt").exists());
}
