//! Trigger handling and newest-wins completion.

use crate::common::fixture_engine;
use postsearch::{SearchSession, Trigger};

#[test]
fn test_enter_and_submit_run_other_keys_do_not() {
    let engine = fixture_engine();
    let mut session = SearchSession::new(&engine);

    assert!(!session.handle(&Trigger::key("r"), "r"));
    assert!(session.outcome().is_cleared());

    assert!(session.handle(&Trigger::key("Enter"), "rust"));
    assert_eq!(session.outcome().results().len(), 2);

    assert!(session.handle(&Trigger::Submit, "java"));
    assert!(session.outcome().is_no_results());

    assert!(session.handle(&Trigger::Submit, "  "));
    assert!(session.outcome().is_cleared());
}

#[test]
fn test_stale_completion_is_discarded() {
    let engine = fixture_engine();
    let mut session = SearchSession::new(&engine);

    let slow = session.begin();
    let fast = session.begin();
    assert!(!session.is_current(slow));
    assert!(session.is_current(fast));

    assert!(session.complete(fast, engine.search("cat")));
    assert!(!session.complete(slow, engine.search("rust")));

    let urls: Vec<&str> = session
        .outcome()
        .results()
        .iter()
        .map(|r| r.post.url.as_str())
        .collect();
    assert_eq!(urls, vec!["/2024/03/cat-and-code/"]);
}
