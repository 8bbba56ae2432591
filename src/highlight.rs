// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting.
//!
//! Wraps each standalone match in the emphasis markers and copies everything
//! else through untouched. The matched text keeps its original casing: a
//! search for `rust` turns "Intro to Rust" into "Intro to <mark>Rust</mark>".

use crate::matcher::Matcher;
use crate::options::SearchOptions;
use crate::utils::normalize_query;

/// Highlight every match of `matcher` in `text`.
pub fn highlight(text: &str, matcher: &Matcher, options: &SearchOptions) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for range in matcher.find_iter(text) {
        out.push_str(&text[last..range.start]);
        out.push_str(&options.mark_open);
        out.push_str(&text[range.clone()]);
        out.push_str(&options.mark_close);
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Highlight `text` for a raw query string.
///
/// The query is trimmed and lower-cased first, as a search would do. An empty
/// (or whitespace-only) query returns the text unchanged.
pub fn highlight_query(text: &str, query: &str, options: &SearchOptions) -> String {
    match Matcher::new(&normalize_query(query)) {
        Ok(matcher) => highlight(text, &matcher, options),
        Err(_) => text.to_string(),
    }
}

/// Remove emphasis markers, recovering the text that was highlighted.
pub fn strip_highlights(text: &str, options: &SearchOptions) -> String {
    if options.mark_open.is_empty() {
        return text.to_string();
    }
    text.replace(&options.mark_open, "")
        .replace(&options.mark_close, "")
}
