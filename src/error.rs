// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for postsearch.
//!
//! Nothing in the search path is fatal: the engine maps every error below to
//! either a cleared view or an empty result set. The variants exist so the
//! loaders and the CLI can say what went wrong.

use thiserror::Error;

/// Main error type for postsearch operations
#[derive(Error, Debug)]
pub enum Error {
    /// The query was empty after trimming; no matcher is built for it.
    #[error("query is empty")]
    EmptyQuery,

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid corpus {source_name}: {reason}")]
    Corpus { source_name: String, reason: String },

    #[error("invalid search options: {0}")]
    Options(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for postsearch operations
pub type Result<T> = std::result::Result<T, Error>;
