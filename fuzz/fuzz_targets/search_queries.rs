// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary bytes go in as the query; the matcher must not panic and its
//! output must respect the cap, stay duplicate-free and carry finite scores.

#![no_main]

use std::collections::HashSet;
use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use lexmatch::{Corpus, Matcher};

const CORPUS: &str = "\
The house on the hill had a horse and a mouse.
A knight rode through the night, thorough and thoughtful.
Café naïve résumé; data-driven e-mail at o'clock.
日本 日本語 Москва straße STRASSE
Thompson Tomson Schmidt Smith catalogue catalog colour color
";

fuzz_target!(|query: &[u8]| {
    static MATCHER: OnceLock<Matcher> = OnceLock::new();
    let matcher = MATCHER.get_or_init(|| {
        let corpus = Corpus::from_text(CORPUS).expect("fixture corpus");
        Matcher::with_defaults(corpus.vocabulary())
    });

    let query = String::from_utf8_lossy(query);
    // Cap by chars to avoid timeouts without splitting a code point
    let query: String = query.chars().take(64).collect();

    let results = matcher.find_matches(&query, 10);
    assert!(results.len() <= 10, "got {} results", results.len());

    let mut seen = HashSet::new();
    for result in &results {
        assert!(result.score.is_finite() && result.score >= 0.0);
        assert!(seen.insert(result.token.id), "duplicate {}", result.word());
        assert!(matcher.vocabulary().get(result.token.id).is_some());
    }

    // Same query, same answer
    let again = matcher.find_matches(&query, 10);
    let first: Vec<_> = results.iter().map(|r| r.token.id).collect();
    let second: Vec<_> = again.iter().map(|r| r.token.id).collect();
    assert_eq!(first, second);
});
