// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! Most of the vocabulary is rejected this way before anything is allocated.
//!
//! The transposition-aware variant (Damerau-Levenshtein) comes from `strsim`;
//! we only wrap it with the same length pre-check.

/// Levenshtein distance between `a` and `b`, or `None` if it exceeds `max`.
///
/// Bounded DP with two early-exit paths:
/// 1. If length difference exceeds `max`, return `None` immediately
/// 2. If the minimum value in a DP row exceeds `max`, abandon the DP
///
/// Both are sound: the length difference and the row minimum are lower
/// bounds on the final distance.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    // Character counts, not byte lengths
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a.chars().count();
    let b_len = b_chars.len();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    (dp[b_len] <= max).then_some(dp[b_len])
}

/// Damerau-Levenshtein distance (adjacent transpositions cost 1), or `None`
/// if it exceeds `max`.
pub fn damerau_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    if a.chars().count().abs_diff(b.chars().count()) > max {
        return None;
    }
    let distance = strsim::damerau_levenshtein(a, b);
    (distance <= max).then_some(distance)
}

/// Edit threshold that grows with the query: 2 for short queries
/// (up to `short_len` chars), 3 beyond that.
pub fn adaptive_threshold(query_len: usize, short_len: usize) -> usize {
    if query_len <= short_len {
        2
    } else {
        3
    }
}
