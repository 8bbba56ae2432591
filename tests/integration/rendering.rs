//! Result-list markup for real searches.

use crate::common::{fixture_engine, make_post};
use postsearch::{render_outcome, SearchEngine, NO_RESULTS_MESSAGE};

#[test]
fn test_render_hits_in_order() {
    let engine = fixture_engine();
    let html = render_outcome(&engine.search("rust"));

    assert!(html.starts_with("<ul class=\"search-results-list\">"));
    assert!(html.ends_with("</ul>"));
    assert_eq!(html.matches("<li class=\"search-result-item\">").count(), 2);

    let first = html.find("/2024/01/intro-to-rust/").unwrap();
    let second = html.find("/2024/06/deploy/").unwrap();
    assert!(first < second);
    assert!(html.contains("<span class=\"result-title\">Intro to <mark>Rust</mark></span>"));
    assert!(html.contains("<span class=\"result-filename\">2024-01-05-intro-to-rust.md</span>"));
}

#[test]
fn test_render_no_results_and_cleared() {
    let engine = fixture_engine();
    assert_eq!(
        render_outcome(&engine.search("java")),
        format!("<div class=\"no-results\">{}</div>", NO_RESULTS_MESSAGE)
    );
    assert_eq!(render_outcome(&engine.search("")), "");
}

#[test]
fn test_render_escapes_link_and_label() {
    let mut post = make_post("Rust", "");
    post.url = "/search?q=a&b=\"c\"".to_string();
    post.filename = "<draft>.md".to_string();
    let engine = SearchEngine::new(vec![post]);

    let html = render_outcome(&engine.search("rust"));
    assert!(html.contains("href=\"/search?q=a&amp;b=&quot;c&quot;\""));
    assert!(html.contains("&lt;draft&gt;.md"));
}
