//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lexmatch::{MatchResult, Matcher};

// Re-export canonical test utilities from lexmatch::testing
pub use lexmatch::testing::{
    matcher_for, matcher_with_config, matcher_with_frequencies, vocab_with_frequencies, words,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// A few lines of prose with repeated function words and near-miss pairs.
pub const PROSE: &str = "\
The house on the hill had a horse and a mouse.
The horse ran past the house; the mouse stayed home.
Ted said the co-op would open, then the coop closed.
A cat, two cats and a catalogue sat on the mat.
Café owners in the town served naïve tourists.
Knights and nights: the knight rode at night.";

/// The `{house: 5, horse: 3, mouse: 2}` vocabulary.
pub fn house_matcher() -> Matcher {
    matcher_with_frequencies(&[("house", 5), ("horse", 3), ("mouse", 2)])
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Position of `word` in a result list.
pub fn rank_of(results: &[MatchResult<'_>], word: &str) -> Option<usize> {
    results.iter().position(|r| r.word() == word)
}

/// Panics unless every word in `order` appears, in that relative order.
pub fn assert_relative_order(results: &[MatchResult<'_>], order: &[&str]) {
    let ranks: Vec<usize> = order
        .iter()
        .map(|word| {
            rank_of(results, word).unwrap_or_else(|| {
                panic!(
                    "'{}' missing from {:?}",
                    word,
                    results.iter().map(|r| r.word()).collect::<Vec<_>>()
                )
            })
        })
        .collect();
    assert!(
        ranks.windows(2).all(|w| w[0] < w[1]),
        "expected order {:?}, got ranks {:?}",
        order,
        ranks
    );
}

/// Panics if any token appears twice.
pub fn assert_no_duplicates(results: &[MatchResult<'_>]) {
    let mut ids: Vec<u32> = results.iter().map(|r| r.token.id.0).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(before, ids.len(), "duplicate tokens in results");
}
