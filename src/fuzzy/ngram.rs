// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character n-gram overlap.
//!
//! Catches typos that edit distance misses on long words: two 12-letter words
//! with four scattered typos are far apart in edits but still share most of
//! their bigrams.

use std::collections::HashSet;

/// Set of character n-grams. Strings shorter than `n` contribute themselves
/// as a single gram so that short words can still match each other.
pub fn ngrams(value: &str, n: usize) -> HashSet<String> {
    let chars: Vec<char> = value.chars().collect();
    if chars.is_empty() || n == 0 {
        return HashSet::new();
    }
    if chars.len() < n {
        return std::iter::once(value.to_string()).collect();
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Jaccard overlap of two gram sets, in `[0, 1]`.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    shared as f64 / union as f64
}
