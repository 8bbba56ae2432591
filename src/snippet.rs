// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction around the first match.
//!
//! The first match is located in a lower-cased copy of the content, and its
//! character offset there picks the window in the original text. The window
//! is measured in characters: `context_before` characters before the match,
//! the query itself, then `context_after` characters, clamped to the content. Ellipses go on both ends of a match-centered snippet even when
//! the window touches the start or end of the content.
//!
//! A post can qualify on its title alone. Its content then has no match to
//! center on, and the snippet is the first `fallback_length` characters with a
//! trailing ellipsis.

use crate::matcher::Matcher;
use crate::options::SearchOptions;
use crate::utils::{char_offset, char_slice};

/// Character window `start..end` of a match-centered snippet.
///
/// `idx` is the match's character offset, `content_len` the content's length
/// in characters.
pub fn snippet_window(
    idx: usize,
    query_len: usize,
    content_len: usize,
    options: &SearchOptions,
) -> (usize, usize) {
    let start = idx.saturating_sub(options.context_before);
    let end = content_len.min(idx + query_len + options.context_after);
    (start, end)
}

/// Build the preview excerpt for `content`.
pub fn extract_snippet(content: &str, matcher: &Matcher, options: &SearchOptions) -> String {
    let ellipsis = options.ellipsis.as_str();

    let lowered = content.to_lowercase();
    let first = matcher
        .find_lowercase(&lowered)
        .map(|range| char_offset(&lowered, range.start));
    let Some(idx) = first else {
        let head = char_slice(content, 0, options.fallback_length);
        return format!("{}{}", head, ellipsis);
    };

    let content_len = content.chars().count();
    let (start, end) = snippet_window(idx, matcher.query_len(), content_len, options);
    format!("{}{}{}", ellipsis, char_slice(content, start, end), ellipsis)
}
