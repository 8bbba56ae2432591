// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Code blocks on rendered pages: find them, copy them, download them.
//!
//! Every `<pre><code>` block on a post gets a Copy and a Download button. The
//! buttons themselves belong to the host page; this module supplies what they
//! act on. A block's text is what the reader sees, so the highlighter's
//! `<span>` soup is stripped and entities are decoded. Downloads are named by
//! position on the page: the first block is `code-snippet-1.txt`.
//!
//! The clipboard and the download mechanism are host capabilities, modelled
//! as the [`Clipboard`] and [`BlobSink`] traits. [`DirectorySink`] is the
//! native sink used by the CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::info;

use crate::error::{Error, Result};

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<pre\b([^>]*)>\s*<code\b([^>]*)>(.*?)</code>").expect("block pattern")
});

static LANGUAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:language|lang)-([A-Za-z0-9_+#-]+)").expect("language pattern")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("entity pattern")
});

/// A code block found on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Zero-based position on the page.
    pub index: usize,
    /// Language hint from a `language-xxx` or `lang-xxx` class, if any.
    pub language: Option<String>,
    /// Text content as the reader sees it.
    pub text: String,
}

impl CodeBlock {
    /// Download name for this block.
    pub fn download_filename(&self) -> String {
        snippet_filename(self.index)
    }

    /// Put the block's text on the clipboard.
    pub fn copy_to(&self, clipboard: &mut impl Clipboard) -> Result<()> {
        clipboard.copy_text(&self.text)
    }

    /// Hand the block's text to a download sink under its download name.
    pub fn download_to(&self, sink: &mut impl BlobSink) -> Result<()> {
        sink.download(self.text.as_bytes(), &self.download_filename())
    }
}

/// Download name for the block at zero-based `index`.
pub fn snippet_filename(index: usize) -> String {
    format!("code-snippet-{}.txt", index + 1)
}

/// Find every `<pre><code>` block in `html`, in document order.
pub fn extract_code_blocks(html: &str) -> Vec<CodeBlock> {
    BLOCK_RE
        .captures_iter(html)
        .enumerate()
        .map(|(index, caps)| {
            let pre_attrs = caps.get(1).map_or("", |m| m.as_str());
            let code_attrs = caps.get(2).map_or("", |m| m.as_str());
            let inner = caps.get(3).map_or("", |m| m.as_str());
            CodeBlock {
                index,
                language: language_hint(code_attrs).or_else(|| language_hint(pre_attrs)),
                text: text_content(inner),
            }
        })
        .collect()
}

fn language_hint(attrs: &str) -> Option<String> {
    LANGUAGE_RE
        .captures(attrs)
        .map(|caps| caps[1].to_ascii_lowercase())
}

fn text_content(inner: &str) -> String {
    let stripped = TAG_RE.replace_all(inner, "");
    ENTITY_RE
        .replace_all(&stripped, |caps: &Captures<'_>| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(name: &str) -> Option<String> {
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let hex = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X"));
            let code = if let Some(hex) = hex {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)?
        }
    };
    Some(decoded.to_string())
}

/// Host clipboard capability.
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// Host download capability: save `bytes` under `filename`.
pub trait BlobSink {
    fn download(&mut self, bytes: &[u8], filename: &str) -> Result<()>;
}

/// Saves downloads as files in one directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Sink writing into `dir`, created if missing.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl BlobSink for DirectorySink {
    fn download(&mut self, bytes: &[u8], filename: &str) -> Result<()> {
        let plain = Path::new(filename)
            .file_name()
            .is_some_and(|name| name == filename);
        if !plain {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("download name must be a bare file name: {}", filename),
            )));
        }
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "saved download");
        self.written.push(path);
        Ok(())
    }
}
