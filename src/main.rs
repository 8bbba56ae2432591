// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use postsearch::{
    extract_code_blocks, load_corpus, render_outcome, DirectorySink, SearchEngine, SearchOptions,
    SearchOutcome,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, OutputFormat};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            file,
            query,
            format,
            options,
        } => run_search(&file, &query, format, options.as_deref()),
        Commands::Snippets { file, output } => run_snippets(&file, &output),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for JSON and HTML output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_search(
    file: &str,
    query: &str,
    format: OutputFormat,
    options_path: Option<&str>,
) -> Result<()> {
    let options = match options_path {
        Some(path) => SearchOptions::from_path(path)
            .with_context(|| format!("Failed to load options from {}", path))?,
        None => SearchOptions::default(),
    };
    let posts = load_corpus(file).with_context(|| format!("Failed to load corpus {}", file))?;
    let engine = SearchEngine::with_options(posts, options);
    let outcome = engine.search(query);

    match format {
        OutputFormat::Text => display::print_outcome(query, &outcome, engine.options()),
        OutputFormat::Json => {
            let json = match &outcome {
                SearchOutcome::Cleared => "null".to_string(),
                SearchOutcome::Matches(results) => serde_json::to_string_pretty(results)
                    .context("Failed to serialize results")?,
            };
            println!("{}", json);
        }
        OutputFormat::Html => println!("{}", render_outcome(&outcome)),
    }
    Ok(())
}

fn run_snippets(file: &str, output: &str) -> Result<()> {
    let html = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
    let blocks = extract_code_blocks(&html);
    if blocks.is_empty() {
        eprintln!("⚠️  No code blocks found in {}", file);
        return Ok(());
    }

    let mut sink = DirectorySink::create(output)
        .with_context(|| format!("Failed to create output dir {}", output))?;
    for block in &blocks {
        block
            .download_to(&mut sink)
            .with_context(|| format!("Failed to write {}", block.download_filename()))?;
    }
    for path in sink.written() {
        eprintln!("{}", display::written(&path.display().to_string()));
    }
    eprintln!("✅ Extracted {} code blocks", blocks.len());
    Ok(())
}
