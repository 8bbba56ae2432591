//! Code block extraction from a rendered page and saving downloads.

use crate::common::FIXTURE_PAGE;
use postsearch::{extract_code_blocks, DirectorySink, Result};
use std::fs;
use tempfile::TempDir;

fn page() -> String {
    fs::read_to_string(FIXTURE_PAGE).unwrap()
}

#[test]
fn test_only_pre_blocks_are_extracted() {
    let blocks = extract_code_blocks(&page());
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].language.as_deref(), Some("bash"));
    assert_eq!(blocks[1].language.as_deref(), Some("rust"));
}

#[test]
fn test_text_is_what_the_reader_sees() {
    let blocks = extract_code_blocks(&page());
    assert_eq!(
        blocks[0].text,
        "curl --proto '=https' -sSf https://sh.rustup.rs | sh"
    );
    assert_eq!(
        blocks[1].text,
        "fn main() {\n    println!(\"a < b && c\");\n}"
    );
}

#[test]
fn test_downloads_land_in_directory() -> Result<()> {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("snippets");
    let mut sink = DirectorySink::create(&out)?;

    for block in extract_code_blocks(&page()) {
        block.download_to(&mut sink)?;
    }

    assert_eq!(sink.written().len(), 2);
    assert_eq!(sink.written()[0], out.join("code-snippet-1.txt"));
    let saved = fs::read_to_string(out.join("code-snippet-2.txt")).unwrap();
    assert!(saved.starts_with("fn main()"));
    Ok(())
}
