// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized similarity ratios on a 0-100 scale.
//!
//! All four ratios are built on the same primitive: indel similarity,
//! `2 * LCS(a, b) / (|a| + |b|)`. The variants differ only in how they
//! prepare the strings first:
//!
//! | Ratio        | Preparation                                     |
//! |--------------|-------------------------------------------------|
//! | `ratio`      | none                                            |
//! | `token_sort` | split on whitespace, sort tokens, rejoin        |
//! | `partial`    | slide the shorter string over the longer one    |
//! | `token_set`  | compare shared tokens against each side's rest  |
//!
//! Two empty strings have no evidence either way, so every ratio returns 0
//! for them rather than a vacuous 100.

use serde::{Deserialize, Serialize};

/// Which ratio a scorer computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    Ratio,
    TokenSort,
    Partial,
    TokenSet,
}

impl RatioKind {
    pub fn compute(self, a: &str, b: &str) -> f64 {
        match self {
            RatioKind::Ratio => ratio(a, b),
            RatioKind::TokenSort => token_sort_ratio(a, b),
            RatioKind::Partial => partial_ratio(a, b),
            RatioKind::TokenSet => token_set_ratio(a, b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RatioKind::Ratio => "ratio",
            RatioKind::TokenSort => "token_sort",
            RatioKind::Partial => "partial",
            RatioKind::TokenSet => "token_set",
        }
    }
}

/// Length of the longest common subsequence, single-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut row = vec![0usize; b.len() + 1];
    for &ac in a {
        let mut diag = 0;
        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ac == bc {
                diag + 1
            } else {
                above.max(row[j])
            };
            diag = above;
        }
    }
    row[b.len()]
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    100.0 * (2 * lcs_len(a, b)) as f64 / total as f64
}

/// Plain indel similarity.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

fn sorted_tokens(value: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}

/// Word-order-invariant ratio: "world hello" vs "hello world" scores 100.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "))
}

/// Best ratio of the shorter string against any equal-length window of the
/// longer one. A candidate that fully contains the query scores 100.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return 0.0;
    }
    if short.len() == long.len() {
        return ratio_chars(&short, &long);
    }

    let mut best = 0.0f64;
    for window in long.windows(short.len()) {
        best = best.max(ratio_chars(&short, window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Set-based ratio: shared tokens count fully, leftovers are compared.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let mut a_tokens = sorted_tokens(a);
    let mut b_tokens = sorted_tokens(b);
    a_tokens.dedup();
    b_tokens.dedup();

    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }

    let common: Vec<&str> = a_tokens
        .iter()
        .filter(|t| b_tokens.binary_search(t).is_ok())
        .copied()
        .collect();
    let only_a: Vec<&str> = a_tokens
        .iter()
        .filter(|t| common.binary_search(t).is_err())
        .copied()
        .collect();
    let only_b: Vec<&str> = b_tokens
        .iter()
        .filter(|t| common.binary_search(t).is_err())
        .copied()
        .collect();

    let base = common.join(" ");
    let with_a = join_nonempty(&base, &only_a.join(" "));
    let with_b = join_nonempty(&base, &only_b.join(" "));

    let mut best = ratio(&with_a, &with_b);
    if !base.is_empty() {
        best = best.max(ratio(&base, &with_a)).max(ratio(&base, &with_b));
    }
    best
}

fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{} {}", left, right),
    }
}

/// Coverage factor: under-length candidates are penalized proportionally,
/// over-length ones get a small, capped bonus.
pub fn coverage_factor(candidate_len: usize, query_len: usize, bonus: f64, cap: f64) -> f64 {
    if query_len == 0 {
        return 1.0;
    }
    let ratio = candidate_len as f64 / query_len as f64;
    if ratio < 1.0 {
        ratio
    } else {
        (1.0 + bonus * (ratio - 1.0)).min(cap)
    }
}
