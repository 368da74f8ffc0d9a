//! Ranking policy: sort keys, tail demotion, filtering and the cap.

use lexmatch::{DampingMode, FrequencyDamping, MatchResult, MatcherConfig};

use super::common::{
    assert_no_duplicates, assert_relative_order, matcher_for, matcher_with_config, rank_of, PROSE,
};

fn undamped() -> MatcherConfig {
    MatcherConfig {
        frequency: FrequencyDamping {
            mode: DampingMode::None,
            weight: 0.0,
        },
        ..MatcherConfig::default()
    }
}

// ============================================================================
// TAIL DEMOTION
// ============================================================================

#[test]
fn test_teh_ranks_ted_above_the() {
    // Without damping "the" scores at least as high as "ted"; only the
    // frequency cutoff can put it second
    let corpus = format!("{}ted", "the ".repeat(60));
    let matcher = matcher_with_config(&corpus, undamped());
    let results = matcher.search("teh");

    let the = &results[rank_of(&results, "the").unwrap()];
    let ted = &results[rank_of(&results, "ted").unwrap()];
    assert!(the.score >= ted.score, "{} < {}", the.score, ted.score);
    assert_relative_order(&results, &["ted", "the"]);
}

#[test]
fn test_teh_keeps_the_first_below_cutoff() {
    let corpus = format!("{}ted", "the ".repeat(60));
    let config = MatcherConfig {
        high_frequency_cutoff: 1000,
        ..undamped()
    };
    let matcher = matcher_with_config(&corpus, config);
    let results = matcher.search("teh");
    assert_relative_order(&results, &["the", "ted"]);
}

#[test]
fn test_frequent_three_letter_word_demoted_despite_tie() {
    // "the" and "thy" score identically for "th"; "the" has the lower id
    // but is over the frequency cutoff
    let corpus = format!("{}thy", "the ".repeat(60));
    let matcher = matcher_with_config(&corpus, undamped());
    let results = matcher.search("th");

    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].word(), "thy");
    assert_eq!(results[1].word(), "the");
}

#[test]
fn test_rare_three_letter_word_not_demoted() {
    let corpus = format!("{}thy", "the ".repeat(10));
    let matcher = matcher_with_config(&corpus, undamped());
    let results = matcher.search("th");

    assert_eq!(results[0].word(), "the");
    assert_eq!(results[1].word(), "thy");
}

#[test]
fn test_cutoff_is_configurable() {
    let corpus = format!("{}thy", "the ".repeat(10));
    let config = MatcherConfig {
        high_frequency_cutoff: 5,
        ..undamped()
    };
    let matcher = matcher_with_config(&corpus, config);
    let results = matcher.search("th");
    assert_eq!(results[0].word(), "thy");
}

// ============================================================================
// SORT KEYS
// ============================================================================

#[test]
fn test_equal_scores_prefer_longer_token() {
    let config = MatcherConfig {
        length_bonus: 0.0,
        ..undamped()
    };
    let matcher = matcher_with_config("cart carts", config);
    let results = matcher.search("car");

    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].word(), "carts");
    assert_eq!(results[1].word(), "cart");
}

#[test]
fn test_scores_descend_after_bypass() {
    let matcher = matcher_for(PROSE);
    for query in ["hoose", "catalog", "nite", "tourist"] {
        let results = matcher.search(query);
        let ranked: Vec<_> = results.iter().filter(|r| !r.exact).collect();
        // demoted tokens restart the order, so compare within each half
        let (head, tail): (Vec<&&MatchResult<'_>>, Vec<_>) = ranked
            .iter()
            .partition(|r| r.token.len() > 3 || (r.token.len() == 3 && r.token.frequency() < 50));
        for half in [head, tail] {
            assert!(
                half.windows(2).all(|w| w[0].score >= w[1].score),
                "scores out of order for '{}'",
                query
            );
        }
    }
}

// ============================================================================
// FILTER, DEDUP, CAP
// ============================================================================

#[test]
fn test_non_ascii_candidates_filtered_but_exact_kept() {
    let matcher = matcher_for("日本 日本語");
    let results = matcher.search("日本");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word(), "日本");
    assert!(results[0].exact);
}

#[test]
fn test_no_duplicates_across_bypass_and_ranking() {
    let matcher = matcher_for(PROSE);
    for query in ["coop", "the", "house", "a"] {
        assert_no_duplicates(&matcher.search(query));
    }
}

#[test]
fn test_cap_respected() {
    let matcher = matcher_for(PROSE);
    let results = matcher.find_matches("the", 3);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].word(), "the");
}

#[test]
fn test_cap_can_cut_bypass() {
    let matcher = matcher_for(PROSE);
    let results = matcher.find_matches("coop", 1);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word(), "co-op");
    assert!(rank_of(&results, "coop").is_none());
}
