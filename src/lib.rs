// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-boundary search and highlighting over a static site's posts.
//!
//! The site build emits every post as `{title, content, url, filename}`. This
//! crate searches that list for a literal query, keeps only standalone
//! occurrences (no letter, digit, `_` or `-` glued on either side), and hands
//! back each hit with its title and a context snippet highlighted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│  search/     │────▶│  render.rs   │
//! │ (load posts)│     │ (engine,     │     │ (result list │
//! └─────────────┘     │  session)    │     │  markup)     │
//!                     └──────┬───────┘     └──────────────┘
//!                            │
//!        ┌───────────────────┼────────────────────┐
//!        ▼                   ▼                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ matcher.rs  │     │  snippet.rs  │     │ highlight.rs │
//! │ (boundary   │     │ (window on   │     │ (<mark> all  │
//! │  literal)   │     │  1st match)  │     │  matches)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! `code_blocks` is the other half of the page enhancements: it pulls
//! `<pre><code>` blocks out of rendered pages for the copy and download
//! buttons.
//!
//! # Usage
//!
//! ```
//! use postsearch::{Post, SearchEngine};
//!
//! let engine = SearchEngine::new(vec![Post::new(
//!     "Intro to Rust",
//!     "Rust is a systems language",
//!     "/a",
//!     "a.md",
//! )]);
//!
//! let outcome = engine.search("rust");
//! assert_eq!(outcome.results()[0].highlighted_title, "Intro to <mark>Rust</mark>");
//! assert!(engine.search("   ").is_cleared());
//! ```

pub mod code_blocks;
pub mod corpus;
mod error;
pub mod highlight;
pub mod matcher;
mod options;
pub mod render;
pub mod search;
pub mod snippet;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use code_blocks::{
    extract_code_blocks, snippet_filename, BlobSink, Clipboard, CodeBlock, DirectorySink,
};
pub use corpus::{load_corpus, parse_corpus, read_corpus};
pub use error::{Error, Result};
pub use highlight::{highlight, highlight_query, strip_highlights};
pub use matcher::Matcher;
pub use options::SearchOptions;
pub use render::{render_outcome, NO_RESULTS_MESSAGE};
pub use search::{SearchEngine, SearchSession, Ticket, Trigger};
pub use snippet::extract_snippet;
pub use types::{Post, SearchOutcome, SearchResult};
pub use utils::{is_word_char, normalize_query};
