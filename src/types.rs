// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: the posts we search and the results we hand back.
//!
//! A `Post` comes from the site build and is never touched after loading.
//! A `SearchResult` borrows its post from the engine's corpus and carries the
//! two markup-bearing strings the page renders. Results live exactly as long
//! as the query that produced them.

use serde::{Deserialize, Deserializer, Serialize};

/// A searchable post from the pre-built corpus.
///
/// Missing or `null` fields deserialize to the empty string, so a post with no
/// content can still match on its title (and vice versa).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Full plain-text body used for matching and snippets.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Link target.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Display label.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub filename: String,
}

impl Post {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
            filename: filename.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One render-ready hit.
///
/// Serializes flat: the post's fields sit next to `highlightedTitle` and
/// `highlightedSnippet`, which is the shape the page script consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub post: &'a Post,
    pub highlighted_title: String,
    pub highlighted_snippet: String,
}

/// What a search invocation produced.
///
/// `Cleared` means no search ran (empty or whitespace query). `Matches` means a
/// search ran; an empty vector is "no matching posts", not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchOutcome<'a> {
    #[default]
    Cleared,
    Matches(Vec<SearchResult<'a>>),
}

impl<'a> SearchOutcome<'a> {
    pub fn is_cleared(&self) -> bool {
        matches!(self, SearchOutcome::Cleared)
    }

    /// Results in corpus order; empty for `Cleared`.
    pub fn results(&self) -> &[SearchResult<'a>] {
        match self {
            SearchOutcome::Cleared => &[],
            SearchOutcome::Matches(results) => results,
        }
    }

    /// True when a search ran and nothing matched.
    pub fn is_no_results(&self) -> bool {
        matches!(self, SearchOutcome::Matches(results) if results.is_empty())
    }

    pub fn into_results(self) -> Vec<SearchResult<'a>> {
        match self {
            SearchOutcome::Cleared => Vec::new(),
            SearchOutcome::Matches(results) => results,
        }
    }
}
