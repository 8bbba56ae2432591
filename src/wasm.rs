// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the post search engine.
//!
//! The page hands over its `posts` array once at load time and keeps the
//! `PostSearcher` for the life of the page. `search` returns plain objects for
//! pages that build their own markup; `render` returns the finished result
//! list for pages that just set `innerHTML`.

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::code_blocks::snippet_filename;
use crate::render::render_outcome;
use crate::search::SearchEngine;
use crate::types::{Post, SearchOutcome};
use crate::SearchOptions;

/// WASM-accessible search engine over the page's post corpus.
#[wasm_bindgen]
pub struct PostSearcher {
    engine: SearchEngine,
}

#[wasm_bindgen]
impl PostSearcher {
    /// Create a searcher from the `posts` array and optional options object.
    #[wasm_bindgen(constructor)]
    pub fn new(posts: JsValue, options: JsValue) -> Result<PostSearcher, JsValue> {
        let posts: Vec<Post> = from_value(posts).map_err(|e| e.to_string())?;
        let options: SearchOptions = if options.is_undefined() || options.is_null() {
            SearchOptions::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };
        options.validate().map_err(|e| e.to_string())?;
        Ok(PostSearcher {
            engine: SearchEngine::with_options(posts, options),
        })
    }

    /// Number of posts in the corpus.
    #[wasm_bindgen(getter = postCount)]
    pub fn post_count(&self) -> usize {
        self.engine.posts().len()
    }

    /// Run a query.
    ///
    /// Returns `null` for a blank query (clear the results) and an array of
    /// `{title, content, url, filename, highlightedTitle, highlightedSnippet}`
    /// otherwise; an empty array means "no matching posts".
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        match self.engine.search(query) {
            SearchOutcome::Cleared => Ok(JsValue::NULL),
            SearchOutcome::Matches(results) => to_value(&results).map_err(|e| e.to_string().into()),
        }
    }

    /// Run a query and return the result container's inner HTML.
    pub fn render(&self, query: &str) -> String {
        render_outcome(&self.engine.search(query))
    }
}

/// Download name for the code block at zero-based `index`.
#[wasm_bindgen(js_name = snippetFilename)]
pub fn snippet_filename_js(index: usize) -> String {
    snippet_filename(index)
}
