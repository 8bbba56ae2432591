// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: where the rubber meets the road.
//!
//! Everything else in the crate feeds this. A query comes in, gets trimmed and
//! lowercased, compiles into a [`Matcher`], and the whole corpus is scanned
//! linearly. Each post's title and content are lower-cased into scratch
//! copies and tested; posts that match in either survive, in corpus order,
//! each with a highlighted title and a highlighted snippet.
//!
//! There is no index and no ranking. Every call is a pure function of the
//! corpus, the options and the query, so the engine is `Sync` and needs no
//! locks; with the `parallel` feature the scan fans out over rayon.

pub mod session;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::Error;
use crate::highlight::highlight;
use crate::matcher::Matcher;
use crate::options::SearchOptions;
use crate::snippet::extract_snippet;
use crate::types::{Post, SearchOutcome, SearchResult};
use crate::utils::normalize_query;

pub use session::{SearchSession, Ticket, Trigger};

/// Owns the read-only corpus and answers queries against it.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    posts: Vec<Post>,
    options: SearchOptions,
}

impl SearchEngine {
    /// Engine over `posts` with default options.
    pub fn new(posts: Vec<Post>) -> Self {
        Self::with_options(posts, SearchOptions::default())
    }

    pub fn with_options(posts: Vec<Post>, options: SearchOptions) -> Self {
        Self { posts, options }
    }

    /// The corpus, in source order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Run a query.
    ///
    /// An empty or whitespace-only query returns [`SearchOutcome::Cleared`]
    /// without building a matcher. Anything else returns
    /// [`SearchOutcome::Matches`], possibly empty.
    pub fn search(&self, raw_query: &str) -> SearchOutcome<'_> {
        let query = normalize_query(raw_query);
        let matcher = match Matcher::new(&query) {
            Ok(matcher) => matcher,
            Err(Error::EmptyQuery) => {
                debug!("empty query, clearing results");
                return SearchOutcome::Cleared;
            }
            Err(e) => {
                warn!(query = %query, error = %e, "could not build matcher, returning no results");
                return SearchOutcome::Matches(Vec::new());
            }
        };

        let results: Vec<SearchResult<'_>> = self
            .filter(&matcher)
            .into_iter()
            .map(|post| build_result(post, &matcher, &self.options))
            .collect();

        debug!(
            query = %query,
            corpus = self.posts.len(),
            matched = results.len(),
            "search complete"
        );
        SearchOutcome::Matches(results)
    }

    /// Posts with at least one standalone match in title or content, in
    /// corpus order.
    #[cfg(not(feature = "parallel"))]
    pub fn filter<'a>(&'a self, matcher: &Matcher) -> Vec<&'a Post> {
        self.posts
            .iter()
            .filter(|post| post_matches(post, matcher))
            .collect()
    }

    /// Posts with at least one standalone match in title or content, in
    /// corpus order.
    #[cfg(feature = "parallel")]
    pub fn filter<'a>(&'a self, matcher: &Matcher) -> Vec<&'a Post> {
        // Indexed collect keeps source order.
        self.posts
            .par_iter()
            .filter(|post| post_matches(post, matcher))
            .collect()
    }
}

/// True if the post qualifies: a match in the lower-cased title or in the
/// lower-cased content.
///
/// The lower-cased strings are throwaway copies; the post itself is never
/// modified.
pub fn post_matches(post: &Post, matcher: &Matcher) -> bool {
    matcher.is_lowercase_match(&post.title.to_lowercase())
        || matcher.is_lowercase_match(&post.content.to_lowercase())
}

/// Assemble the render-ready result for a qualifying post.
pub fn build_result<'a>(
    post: &'a Post,
    matcher: &Matcher,
    options: &SearchOptions,
) -> SearchResult<'a> {
    let snippet = extract_snippet(&post.content, matcher, options);
    SearchResult {
        post,
        highlighted_title: highlight(&post.title, matcher, options),
        highlighted_snippet: highlight(&snippet, matcher, options),
    }
}
