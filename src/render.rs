// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result-list markup.
//!
//! Produces the same structure the page styles expect: a
//! `search-results-list` of linked items, or a `no-results` notice. A cleared
//! outcome renders as nothing at all so the container empties.
//!
//! `url` and `filename` come from the corpus as plain text and are escaped.
//! The highlighted title and snippet already carry markup and go in as-is.

use crate::types::{SearchOutcome, SearchResult};
use crate::utils::escape_html;

/// Message shown when a search ran and nothing matched.
pub const NO_RESULTS_MESSAGE: &str = "No matching posts found";

/// Render an outcome into the results container's inner HTML.
pub fn render_outcome(outcome: &SearchOutcome<'_>) -> String {
    match outcome {
        SearchOutcome::Cleared => String::new(),
        SearchOutcome::Matches(results) if results.is_empty() => {
            format!("<div class=\"no-results\">{}</div>", NO_RESULTS_MESSAGE)
        }
        SearchOutcome::Matches(results) => render_results(results),
    }
}

fn render_results(results: &[SearchResult<'_>]) -> String {
    let mut html = String::from("<ul class=\"search-results-list\">");
    for result in results {
        html.push_str(&render_item(result));
    }
    html.push_str("</ul>");
    html
}

fn render_item(result: &SearchResult<'_>) -> String {
    format!(
        concat!(
            "<li class=\"search-result-item\">",
            "<a href=\"{url}\" class=\"search-result-link\">",
            "<span class=\"result-filename\">{filename}</span>",
            "<span class=\"result-title\">{title}</span>",
            "<div class=\"result-snippet\">{snippet}</div>",
            "</a>",
            "</li>"
        ),
        url = escape_html(&result.post.url),
        filename = escape_html(&result.post.filename),
        title = result.highlighted_title,
        snippet = result.highlighted_snippet,
    )
}
