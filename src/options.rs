// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search options: snippet window and emphasis markers.
//!
//! Defaults reproduce the page script exactly (30 characters of context
//! before the match, 70 after the query, a 100-character fallback excerpt,
//! `...` ellipses, `<mark>` emphasis). Every key is optional when loading
//! from JSON, so a config file only names what it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_FALLBACK_LENGTH: usize = 100;
const DEFAULT_CONTEXT_BEFORE: usize = 30;
const DEFAULT_CONTEXT_AFTER: usize = 70;
const DEFAULT_ELLIPSIS: &str = "...";
const DEFAULT_MARK_OPEN: &str = "<mark>";
const DEFAULT_MARK_CLOSE: &str = "</mark>";

/// Search options passed from the CLI, a JSON file, or JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchOptions {
    /// Characters of content shown when only the title matched (default: 100)
    pub fallback_length: usize,
    /// Characters kept before the first match (default: 30)
    pub context_before: usize,
    /// Characters kept after the end of the query (default: 70)
    pub context_after: usize,
    /// Ellipsis marker (default: "...")
    pub ellipsis: String,
    /// Opening emphasis marker (default: "<mark>")
    pub mark_open: String,
    /// Closing emphasis marker (default: "</mark>")
    pub mark_close: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fallback_length: DEFAULT_FALLBACK_LENGTH,
            context_before: DEFAULT_CONTEXT_BEFORE,
            context_after: DEFAULT_CONTEXT_AFTER,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            mark_open: DEFAULT_MARK_OPEN.to_string(),
            mark_close: DEFAULT_MARK_CLOSE.to_string(),
        }
    }
}

impl SearchOptions {
    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: SearchOptions =
            serde_json::from_str(json).map_err(|e| Error::Options(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw).map_err(|e| match e {
            Error::Options(reason) => Error::Options(format!("{}: {}", path.display(), reason)),
            other => other,
        })
    }

    /// Reject marker pairs that cannot be stripped back out of highlighted text.
    pub fn validate(&self) -> Result<()> {
        if self.mark_open.is_empty() != self.mark_close.is_empty() {
            return Err(Error::Options(
                "markOpen and markClose must both be set or both be empty".to_string(),
            ));
        }
        Ok(())
    }
}
