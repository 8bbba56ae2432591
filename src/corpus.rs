// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the pre-built post corpus.
//!
//! The site build writes the posts as one JSON array of
//! `{title, content, url, filename}` objects. We read it once, keep its order,
//! and never write it back.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::types::Post;

/// Parse a corpus from a JSON string. `source_name` labels errors.
pub fn parse_corpus(json: &str, source_name: &str) -> Result<Vec<Post>> {
    serde_json::from_str(json).map_err(|e| Error::Corpus {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Read a corpus from any reader (stdin, a socket, an archive entry).
pub fn read_corpus<R: Read>(mut reader: R, source_name: &str) -> Result<Vec<Post>> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_corpus(&raw, source_name)
}

/// Read a corpus from a JSON file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<Post>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let posts = parse_corpus(&raw, &path.display().to_string())?;
    info!(path = %path.display(), posts = posts.len(), "loaded corpus");
    Ok(posts)
}
