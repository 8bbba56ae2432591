// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-boundary literal matching.
//!
//! A query is matched as a literal string, and only where it stands alone:
//! the character before the match and the character after it must not be
//! word characters (ASCII letters, digits, `_` or `-`). So `cat` finds
//! "The cat sat" but not "concatenate" or "cat-astrophe".
//!
//! Two comparisons live here. Deciding whether a post qualifies, and where
//! its snippet starts, runs on lower-cased copies of the text: the copy is
//! searched for the lower-cased query exactly, so inclusion follows
//! `str::to_lowercase` and nothing else. Highlighting runs on the original
//! text with a case-insensitive pattern so the marked span keeps its casing.
//!
//! The `regex` crate has no look-around, so each pattern is just the escaped
//! literal and the boundaries are checked by hand on each candidate. When a
//! candidate fails the check, scanning resumes one character after its start
//! rather than after its end. That matters for self-overlapping queries:
//! `aa` in `"aaa aa"` must reject every candidate inside `aaa` and still land
//! on the standalone `aa`.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::utils::is_word_char;

/// Compiled boundary-aware literal matcher.
#[derive(Debug, Clone)]
pub struct Matcher {
    query: String,
    query_len: usize,
    /// Case-insensitive literal, run over original text.
    regex: Regex,
    /// Lower-cased literal, run exactly over lower-cased copies.
    folded: Regex,
}

impl Matcher {
    /// Build a matcher for `query`, taken literally.
    ///
    /// Every regex metacharacter is escaped, so `(.*)` matches only the four
    /// characters `(`, `.`, `*`, `)`. Returns [`Error::EmptyQuery`] when the
    /// query is empty or only whitespace.
    pub fn new(query: &str) -> Result<Self> {
        if query.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }
        let regex = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()?;
        let folded = Regex::new(&regex::escape(&query.to_lowercase()))?;
        Ok(Self {
            query: query.to_string(),
            query_len: query.chars().count(),
            regex,
            folded,
        })
    }

    /// The literal this matcher was built from.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Length of the query in characters.
    pub fn query_len(&self) -> usize {
        self.query_len
    }

    /// True if `haystack` contains at least one standalone occurrence,
    /// ignoring case.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.find(haystack).is_some()
    }

    /// Byte range of the first standalone occurrence, ignoring case.
    pub fn find(&self, haystack: &str) -> Option<Range<usize>> {
        find_standalone(&self.regex, haystack, 0)
    }

    /// Iterate over all standalone, non-overlapping occurrences (byte ranges),
    /// ignoring case.
    pub fn find_iter<'m, 'h>(&'m self, haystack: &'h str) -> Matches<'m, 'h> {
        Matches {
            regex: &self.regex,
            haystack,
            pos: 0,
        }
    }

    /// True if `lowered`, an already lower-cased copy of some text, contains
    /// a standalone occurrence of the lower-cased query.
    pub fn is_lowercase_match(&self, lowered: &str) -> bool {
        self.find_lowercase(lowered).is_some()
    }

    /// Byte range of the first standalone occurrence in `lowered`, an already
    /// lower-cased copy of some text.
    pub fn find_lowercase(&self, lowered: &str) -> Option<Range<usize>> {
        find_standalone(&self.folded, lowered, 0)
    }
}

fn find_standalone(regex: &Regex, haystack: &str, mut start: usize) -> Option<Range<usize>> {
    while start <= haystack.len() {
        let candidate = regex.find_at(haystack, start)?;
        if is_standalone(haystack, candidate.start(), candidate.end()) {
            return Some(candidate.range());
        }
        // Retry from the next character, not the end of the candidate.
        start = candidate.start()
            + haystack[candidate.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
    }
    None
}

fn is_standalone(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Iterator over standalone matches, created by [`Matcher::find_iter`].
pub struct Matches<'m, 'h> {
    regex: &'m Regex,
    haystack: &'h str,
    pos: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = find_standalone(self.regex, self.haystack, self.pos)?;
        self.pos = range.end;
        Some(range)
    }
}
