//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::Post;

/// Create a post with the given title and content.
///
/// This is the canonical implementation used across all tests. The url and
/// filename are derived from the title.
pub fn make_post(title: &str, content: &str) -> Post {
    let slug: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    Post::new(
        title,
        content,
        format!("/posts/{}/", slug),
        format!("{}.md", slug),
    )
}

/// Build a corpus from `(title, content)` pairs.
pub fn make_corpus(pairs: &[(&str, &str)]) -> Vec<Post> {
    pairs
        .iter()
        .map(|(title, content)| make_post(title, content))
        .collect()
}
