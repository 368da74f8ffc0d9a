//! Ranking invariants that must hold for every vocabulary and query.
//!
//! - results never exceed the cap
//! - no token appears twice
//! - exact matches lead, in first-occurrence order
//! - multi-character queries never surface single-character or non-ASCII noise
//! - scores are finite and non-negative
//! - the same query always gives the same answer

use proptest::prelude::*;

use super::common::{assert_no_duplicates, matcher_for};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Word-like strings, biased toward collisions so exact matches happen.
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-e]{1,4}").unwrap(),
        prop::string::string_regex("[a-z]{2,8}").unwrap(),
        prop::string::string_regex("[a-z]{1,3}[-'][a-z]{1,3}").unwrap(),
        prop::sample::select(vec![
            "café".to_string(),
            "naïve".to_string(),
            "日本".to_string(),
            "Über".to_string(),
            "a".to_string(),
            "I".to_string(),
        ]),
    ]
}

fn corpus_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::collection::vec(word_strategy(), 1..8), 1..6).prop_map(|lines| {
        lines
            .into_iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        prop::string::string_regex("[a-z?!. -]{0,10}").unwrap(),
    ]
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_results_within_cap(corpus in corpus_strategy(), query in query_strategy(), cap in 0usize..6) {
        let matcher = matcher_for(&corpus);
        prop_assert!(matcher.find_matches(&query, cap).len() <= cap);
    }

    #[test]
    fn prop_no_duplicates(corpus in corpus_strategy(), query in query_strategy()) {
        let matcher = matcher_for(&corpus);
        assert_no_duplicates(&matcher.search(&query));
    }

    #[test]
    fn prop_exact_matches_lead_in_corpus_order(corpus in corpus_strategy(), query in word_strategy()) {
        let matcher = matcher_for(&corpus);
        let results = matcher.search(&query);
        let q = lexmatch::Query::new(&query);

        let exact_count = results.iter().take_while(|r| r.exact).count();
        prop_assert!(results[exact_count..].iter().all(|r| !r.exact));

        if !q.clean().is_empty() {
            let expected = matcher.vocabulary().with_clean(q.clean());
            let got: Vec<_> = results[..exact_count].iter().map(|r| r.token.id).collect();
            prop_assert_eq!(got.as_slice(), expected);
            prop_assert!(results[..exact_count]
                .windows(2)
                .all(|w| w[0].occurrences()[0].position < w[1].occurrences()[0].position));
        } else {
            prop_assert_eq!(exact_count, 0);
        }
    }

    #[test]
    fn prop_noise_filtered(corpus in corpus_strategy(), query in word_strategy()) {
        let matcher = matcher_for(&corpus);
        let q = lexmatch::Query::new(&query);
        prop_assume!(q.clean_len() > 1);

        for result in matcher.search(&query).iter().filter(|r| !r.exact) {
            prop_assert!(result.token.len() > 1, "single char '{}'", result.word());
            prop_assert!(result.token.is_ascii(), "non-ASCII '{}'", result.word());
        }
    }

    #[test]
    fn prop_scores_finite(corpus in corpus_strategy(), query in query_strategy()) {
        let matcher = matcher_for(&corpus);
        for result in matcher.search(&query) {
            prop_assert!(result.score.is_finite());
            prop_assert!(result.score >= 0.0);
        }
    }

    #[test]
    fn prop_idempotent(corpus in corpus_strategy(), query in query_strategy()) {
        let matcher = matcher_for(&corpus);
        let first: Vec<_> = matcher.search(&query).iter().map(|r| (r.token.id, r.score.to_bits())).collect();
        let second: Vec<_> = matcher.search(&query).iter().map(|r| (r.token.id, r.score.to_bits())).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_arbitrary_unicode_never_panics(corpus in ".{0,40}", query in ".{0,12}") {
        let matcher = matcher_for(&corpus);
        let _ = matcher.search(&query);
        let _ = matcher.explain(&query);
    }
}
