// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the postsearch command-line interface.
//!
//! Two subcommands: `search` runs a query over a corpus file and prints the
//! hits (as terminal text, JSON, or the page's result-list markup), and
//! `snippets` pulls the code blocks out of a rendered page into
//! `code-snippet-N.txt` files, the same files the page's Download buttons
//! produce.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "postsearch",
    about = "Word-boundary search and highlighting over a static site's posts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display results
    Search {
        /// Path to the posts JSON file (an array of {title, content, url, filename})
        file: String,

        /// Search query, matched literally on word boundaries
        query: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// JSON file overriding snippet and highlight options
        ///
        /// Keys (all optional): fallbackLength, contextBefore, contextAfter,
        /// ellipsis, markOpen, markClose.
        #[arg(long)]
        options: Option<String>,
    },

    /// Extract code blocks from a rendered page into code-snippet-N.txt files
    Snippets {
        /// Path to the rendered HTML page
        file: String,

        /// Output directory for the snippet files
        #[arg(short, long)]
        output: String,
    },
}

/// How `search` prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal listing
    Text,
    /// JSON array of results (null for an empty query)
    Json,
    /// The page's result-list markup
    Html,
}
