//! Property tests for score accumulation.
//!
//! Raw scores combine by `max`:
//!
//! 1. **Order-free**: merging maps in any order gives the same map
//! 2. **Idempotent**: merging a map with itself changes nothing
//! 3. **Monotone**: adding a signal never lowers any token's raw score
//! 4. **Never a sum**: a merged score always equals one of its inputs

use std::sync::Arc;

use proptest::prelude::*;

use lexmatch::{
    Matcher, MatcherConfig, PhoneticIndex, Query, ScoreMap, SignalSpec, TokenId, Vocabulary,
};
use lexmatch::search::SignalContext;

const LEN: usize = 16;

fn score_map_strategy() -> impl Strategy<Value = ScoreMap> {
    prop::collection::vec((0..LEN as u32, 1.0f64..110.0), 0..12).prop_map(|entries| {
        let mut map = ScoreMap::new(LEN);
        for (id, score) in entries {
            map.boost(TokenId(id), score);
        }
        map
    })
}

fn corpus_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[a-h]{1,6}").unwrap(), 1..30)
        .prop_map(|words| words.join(" "))
}

fn raw_scores(vocab: &Vocabulary, query: &str, signals: &[SignalSpec]) -> ScoreMap {
    let phonetic = PhoneticIndex::build(vocab);
    let query = Query::new(query);
    let ctx = SignalContext {
        query: &query,
        vocab,
        phonetic: &phonetic,
    };
    let mut map = ScoreMap::new(vocab.len());
    for spec in signals {
        spec.apply(&ctx, &mut map);
    }
    map
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_merge_commutes(a in score_map_strategy(), b in score_map_strategy()) {
        prop_assert_eq!(a.clone().merge(&b), b.merge(&a));
    }

    #[test]
    fn prop_merge_associates(
        a in score_map_strategy(),
        b in score_map_strategy(),
        c in score_map_strategy(),
    ) {
        let left = a.clone().merge(&b).merge(&c);
        let right = a.merge(&b.merge(&c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_merge_idempotent(a in score_map_strategy()) {
        prop_assert_eq!(a.clone().merge(&a), a);
    }

    #[test]
    fn prop_merge_is_max_not_sum(a in score_map_strategy(), b in score_map_strategy()) {
        let merged = a.clone().merge(&b);
        for idx in 0..LEN as u32 {
            let id = TokenId(idx);
            let expected = match (a.get(id), b.get(id)) {
                (Some(x), Some(y)) => Some(x.max(y)),
                (x, y) => x.or(y),
            };
            prop_assert_eq!(merged.get(id), expected);
        }
    }

    #[test]
    fn prop_adding_signals_never_lowers_scores(
        corpus in corpus_strategy(),
        query in "[a-h]{1,6}",
        split in 0usize..12,
    ) {
        let vocab = Vocabulary::from_corpus(&corpus).unwrap();
        let all = SignalSpec::default_set();
        let split = split.min(all.len());

        let partial = raw_scores(&vocab, &query, &all[..split]);
        let full = raw_scores(&vocab, &query, &all);
        for (id, score) in partial.iter() {
            prop_assert!(full.get(id).unwrap_or(0.0) >= score);
        }
    }

    #[test]
    fn prop_explain_raw_is_max_of_signals(corpus in corpus_strategy(), query in "[a-h]{1,6}") {
        let vocab = Arc::new(Vocabulary::from_corpus(&corpus).unwrap());
        let matcher = Matcher::new(vocab, MatcherConfig::default()).unwrap();
        for entry in matcher.explain(&query).matches {
            let best = entry.signals.iter().map(|h| h.score).fold(0.0f64, f64::max);
            if entry.result.exact && entry.signals.is_empty() {
                continue;
            }
            prop_assert_eq!(entry.raw_score, best);
        }
    }
}
