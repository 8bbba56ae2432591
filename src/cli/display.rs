// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for `postsearch search`.
//!
//! Hits print the way the page lays them out: filename and highlighted title,
//! then the link, then the highlighted snippet. In a terminal the `<mark>`
//! spans become bold color instead of literal tags.
//!
//! Colors come from a four-role palette in OneDark or One Light flavor.
//! `POSTSEARCH_THEME` ("dark" or "light") picks one, else a light `COLORFGBG`
//! background does, else dark. `NO_COLOR` or a non-TTY stdout turns color off.

use std::sync::OnceLock;

use postsearch::{SearchOptions, SearchOutcome, SearchResult, NO_RESULTS_MESSAGE};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Width of the header rule
const RULE_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn parse(value: &str) -> Option<Theme> {
        match value.to_lowercase().as_str() {
            "light" | "l" => Some(Theme::Light),
            "dark" | "d" => Some(Theme::Dark),
            _ => None,
        }
    }

    fn from_env() -> Theme {
        if let Some(theme) = std::env::var("POSTSEARCH_THEME")
            .ok()
            .and_then(|v| Theme::parse(&v))
        {
            return theme;
        }
        // COLORFGBG is "fg;bg"; 7 and 9-15 are light backgrounds
        let light_bg = std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
            .is_some_and(|bg| bg >= 7 && bg != 8);
        if light_bg {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    fn rgb(self, role: Role) -> (u8, u8, u8) {
        match (self, role) {
            (Theme::Dark, Role::Muted) => (92, 99, 112),   // #5c6370
            (Theme::Dark, Role::Link) => (97, 175, 239),   // #61afef
            (Theme::Dark, Role::Mark) => (229, 192, 123),  // #e5c07b
            (Theme::Dark, Role::Ok) => (152, 195, 121),    // #98c379
            (Theme::Light, Role::Muted) => (160, 161, 167), // #a0a1a7
            (Theme::Light, Role::Link) => (64, 120, 242),  // #4078f2
            (Theme::Light, Role::Mark) => (152, 104, 1),   // #986801
            (Theme::Light, Role::Ok) => (80, 161, 79),     // #50a14f
        }
    }
}

/// What a piece of output is, rather than which color it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Muted,
    Link,
    Mark,
    Ok,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn color(role: Role) -> String {
    let (r, g, b) = THEME.get_or_init(Theme::from_env).rgb(role);
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(role: Role, text: &str, colored: bool) -> String {
    if colored {
        format!("{}{}{}", color(role), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// Header rule: ─ label ────────────
fn rule(label: &str, colored: bool) -> String {
    let used = label.chars().count() + 3;
    let label = if colored {
        format!("{}{}{}", BOLD, label, RESET)
    } else {
        label.to_string()
    };
    let line = "─".repeat(RULE_WIDTH.saturating_sub(used));
    format!("─ {} {}", label, paint(Role::Muted, &line, colored))
}

/// Replace emphasis markers with terminal styling, or drop them when
/// `colored` is false.
fn paint_highlights(text: &str, options: &SearchOptions, colored: bool) -> String {
    if options.mark_open.is_empty() {
        return text.to_string();
    }
    let (open, close) = if colored {
        (format!("{}{}", BOLD, color(Role::Mark)), RESET.to_string())
    } else {
        (String::new(), String::new())
    };
    text.replace(&options.mark_open, &open)
        .replace(&options.mark_close, &close)
}

fn format_result(
    position: usize,
    result: &SearchResult<'_>,
    options: &SearchOptions,
    colored: bool,
) -> String {
    format!(
        "{:>3}. {}  {}\n     {}\n     {}",
        position,
        paint(Role::Muted, &result.post.filename, colored),
        paint_highlights(&result.highlighted_title, options, colored),
        paint(Role::Link, &result.post.url, colored),
        paint_highlights(&result.highlighted_snippet, options, colored),
    )
}

/// Print a search outcome for humans.
pub fn print_outcome(query: &str, outcome: &SearchOutcome<'_>, options: &SearchOptions) {
    let colored = use_colors();
    match outcome {
        SearchOutcome::Cleared => {
            eprintln!("{}", paint(Role::Muted, "Empty query; nothing to search", colored));
        }
        SearchOutcome::Matches(results) if results.is_empty() => {
            println!("{}", NO_RESULTS_MESSAGE);
        }
        SearchOutcome::Matches(results) => {
            let noun = if results.len() == 1 { "result" } else { "results" };
            let label = format!("{} {} for \"{}\"", results.len(), noun, query);
            println!("{}", rule(&label, colored));
            for (i, result) in results.iter().enumerate() {
                println!();
                println!("{}", format_result(i + 1, result, options, colored));
            }
        }
    }
}

/// Success line for a written file: ✓ path
pub fn written(path: &str) -> String {
    format!("  {} {}", paint(Role::Ok, "✓", use_colors()), path)
}
