//! Same input, same output: across calls, matchers and threads.

use std::sync::Arc;
use std::thread;

use lexmatch::{MatchResult, Matcher, MatcherConfig};

use super::common::{matcher_for, PROSE};

const QUERIES: &[&str] = &["hoose", "teh", "cat", "coop", "nite", "tourist", "?!", "a"];

fn snapshot(results: &[MatchResult<'_>]) -> Vec<(String, u64, bool)> {
    results
        .iter()
        .map(|r| (r.word().to_string(), r.score.to_bits(), r.exact))
        .collect()
}

#[test]
fn test_repeated_queries_identical() {
    let matcher = matcher_for(PROSE);
    for query in QUERIES {
        let first = snapshot(&matcher.search(query));
        let second = snapshot(&matcher.search(query));
        assert_eq!(first, second, "query '{}' changed between calls", query);
    }
}

#[test]
fn test_independent_matchers_agree() {
    let a = matcher_for(PROSE);
    let b = matcher_for(PROSE);
    for query in QUERIES {
        assert_eq!(snapshot(&a.search(query)), snapshot(&b.search(query)));
    }
}

#[test]
fn test_concurrent_queries_match_sequential() {
    let matcher = Arc::new(matcher_for(PROSE));
    let expected: Vec<_> = QUERIES
        .iter()
        .map(|q| snapshot(&matcher.search(q)))
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || {
                QUERIES
                    .iter()
                    .map(|q| snapshot(&matcher.search(q)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_signal_order_does_not_matter() {
    let mut reversed = MatcherConfig::default();
    reversed.signals.reverse();

    let forward = matcher_for(PROSE);
    let backward = Matcher::new(forward.vocabulary().clone().into(), reversed).unwrap();
    for query in QUERIES {
        assert_eq!(
            snapshot(&forward.search(query)),
            snapshot(&backward.search(query)),
            "signal order changed results for '{}'",
            query
        );
    }
}

#[test]
fn test_explain_matches_search() {
    let matcher = matcher_for(PROSE);
    for query in QUERIES {
        let searched = snapshot(&matcher.search(query));
        let explained: Vec<_> = matcher
            .explain(query)
            .matches
            .iter()
            .map(|e| (e.result.word().to_string(), e.result.score.to_bits(), e.result.exact))
            .collect();
        assert_eq!(searched, explained);
    }
}
