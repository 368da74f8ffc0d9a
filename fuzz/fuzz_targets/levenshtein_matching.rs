// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bounded edit distances.
//!
//! The bounded Levenshtein must agree with an unbounded reference whenever it
//! answers, and Damerau-Levenshtein must never exceed it.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexmatch::fuzzy::{damerau_bounded, levenshtein_bounded};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    let query: String = input.query.chars().take(32).collect();
    let target: String = input.target.chars().take(64).collect();
    let max = usize::from(input.max % 6);

    let reference = strsim::levenshtein(&query, &target);
    match levenshtein_bounded(&query, &target, max) {
        Some(d) => assert_eq!(d, reference, "{query:?} vs {target:?}"),
        None => assert!(reference > max),
    }

    if let Some(d) = damerau_bounded(&query, &target, max) {
        assert!(d <= reference);
        assert!(d <= max);
    }
});
