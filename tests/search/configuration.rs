//! Config-driven behavior: signal lists, damping and caps.

use std::sync::Arc;

use lexmatch::{
    Coverage, DampingMode, FrequencyDamping, Matcher, MatcherConfig, RatioKind, SignalSpec,
    TextForm,
};

use super::common::{matcher_with_config, vocab_with_frequencies, words, PROSE};

#[test]
fn test_exact_only_signal_list() {
    let config = MatcherConfig::default().with_signals(vec![SignalSpec::Exact { score: 105.0 }]);
    let matcher = matcher_with_config(PROSE, config);

    assert!(matcher.search("hous").is_empty());
    assert_eq!(words(&matcher, "house"), vec!["house"]);
}

#[test]
fn test_search_uses_configured_cap() {
    let config = MatcherConfig {
        max_results: 2,
        ..MatcherConfig::default()
    };
    let matcher = matcher_with_config(PROSE, config);
    assert_eq!(matcher.search("the").len(), 2);
    // explicit cap overrides it
    assert!(matcher.find_matches("the", 5).len() > 2);
}

#[test]
fn test_full_sqrt_damping_zeroes_most_frequent() {
    let config = MatcherConfig {
        frequency: FrequencyDamping {
            mode: DampingMode::Sqrt,
            weight: 1.0,
        },
        ..MatcherConfig::default()
    };
    let vocab = vocab_with_frequencies(&[("house", 5), ("horse", 3), ("mouse", 2)]);
    let matcher = Matcher::new(Arc::new(vocab), config).unwrap();
    let results = matcher.search("hoose");

    let house = results.iter().find(|r| r.word() == "house").unwrap();
    assert_eq!(house.score, 0.0);
    // undamped scores would put house first; now the rarest word leads
    let order: Vec<&str> = results.iter().map(|r| r.word()).collect();
    assert_eq!(order, vec!["mouse", "horse", "house"]);
}

#[test]
fn test_coverage_penalizes_short_candidates() {
    let ratio = |coverage: Option<Coverage>| SignalSpec::Ratio {
        ratio: RatioKind::Partial,
        form: TextForm::Clean,
        threshold: 70.0,
        limit: None,
        coverage,
    };
    let plain = matcher_with_config(
        "cathedral cat",
        MatcherConfig::default().with_signals(vec![ratio(None)]),
    );
    let covered = matcher_with_config(
        "cathedral cat",
        MatcherConfig::default().with_signals(vec![ratio(Some(Coverage::default()))]),
    );

    let raw = |m: &Matcher| {
        m.explain("cathedrl")
            .matches
            .iter()
            .find(|e| e.result.word() == "cat")
            .map(|e| e.raw_score)
            .unwrap()
    };
    assert_eq!(raw(&plain), 100.0);
    assert!((raw(&covered) - 100.0 * 3.0 / 8.0).abs() < 1e-9);
}

#[test]
fn test_token_set_ratio_signal() {
    let config = MatcherConfig::default().with_signals(vec![SignalSpec::Ratio {
        ratio: RatioKind::TokenSet,
        form: TextForm::Raw,
        threshold: 90.0,
        limit: None,
        coverage: None,
    }]);
    let matcher = matcher_with_config(PROSE, config);
    let results = matcher.search("horse");
    assert_eq!(results[0].word(), "horse");
    assert!(results.iter().all(|r| r.score > 0.0));
}

#[test]
fn test_config_from_json_drives_matcher() {
    let config = MatcherConfig::from_json(
        r#"{
            "max_results": 1,
            "signals": [
                { "kind": "phonetic", "score": 100 }
            ]
        }"#,
    )
    .unwrap();
    let matcher = matcher_with_config(PROSE, config);
    assert_eq!(words(&matcher, "hows"), vec!["house"]);
}
