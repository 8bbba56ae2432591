// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.
//!
//! Positions exposed by the crate are character offsets (Unicode scalar
//! values), the way the page script counts them. The regex engine speaks
//! bytes, so these helpers convert at the edges.

/// Normalize a raw query: trim surrounding whitespace and lowercase.
///
/// Interior whitespace is kept as typed; a query of `"hello  world"` searches
/// for that exact literal.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Characters that glue onto a word: ASCII letters, digits, `_` and `-`.
///
/// Hyphen is included so `cat` does not match inside `cat-astrophe`.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Convert a byte offset (on a char boundary) to a character offset.
pub fn char_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}

/// Take characters `start..end` of `text` (character offsets, clamped).
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let byte_at = |n: usize| {
        text.char_indices()
            .nth(n)
            .map_or(text.len(), |(byte, _)| byte)
    };
    let start_byte = byte_at(start);
    let end_byte = byte_at(end);
    &text[start_byte..end_byte]
}

/// Escape the five HTML-significant characters for text and attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
