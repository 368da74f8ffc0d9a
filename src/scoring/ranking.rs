// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates become an ordered list.
//!
//! Five steps, always in this order:
//!
//! 1. **Bypass**: tokens whose clean form equals the query's go first, in the
//!    order they first appear in the corpus, whatever their score.
//! 2. **Sort**: the rest by final score descending, then token length
//!    descending, then id ascending.
//! 3. **Tail demotion**: tokens of length ≤ 2, and length-3 tokens at or above
//!    the high-frequency cutoff, move behind everything else. Stable, so
//!    each half keeps its sorted order.
//! 4. **Filter**: for queries longer than one clean character, single-char and
//!    non-ASCII candidates are dropped.
//! 5. **Dedup and cap**: bypass then ranked, each token once, at most
//!    `max_results`.
//!
//! Demotion reorders; it never changes a score.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::index::Vocabulary;
use crate::types::{MatchResult, Token, TokenId};

/// A scored token on its way to the result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub id: TokenId,
    pub score: f64,
}

/// Ranker knobs that come from configuration or the query.
#[derive(Debug, Clone, Copy)]
pub struct RankPolicy {
    pub high_frequency_cutoff: usize,
    pub max_results: usize,
    /// Drop single-char and non-ASCII candidates.
    pub filter_short: bool,
}

/// Primary sort order: score desc, length desc, id asc.
///
/// Scores are always finite (`ScoreMap` refuses anything else), so
/// `total_cmp` agrees with the numeric order.
pub fn compare_candidates(a: &Candidate, b: &Candidate, vocab: &Vocabulary) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| {
            let a_len = vocab.token(a.id).len();
            let b_len = vocab.token(b.id).len();
            b_len.cmp(&a_len)
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// Does this token belong at the back of the list?
pub fn is_tail(token: &Token, high_frequency_cutoff: usize) -> bool {
    match token.len() {
        0..=2 => true,
        3 => token.frequency() >= high_frequency_cutoff,
        _ => false,
    }
}

/// Never surfaced for a multi-character query.
pub fn is_noise(token: &Token) -> bool {
    token.len() == 1 || !token.is_ascii()
}

/// Order candidates into the final result list.
///
/// `bypass` must already be in first-occurrence order. `scored` may contain
/// bypass tokens too; dedup drops the second copy.
pub fn rank<'v>(
    vocab: &'v Vocabulary,
    bypass: Vec<Candidate>,
    mut scored: Vec<Candidate>,
    policy: RankPolicy,
) -> Vec<MatchResult<'v>> {
    scored.sort_by(|a, b| compare_candidates(a, b, vocab));

    let (mut ranked, tail): (Vec<Candidate>, Vec<Candidate>) = scored
        .into_iter()
        .partition(|c| !is_tail(vocab.token(c.id), policy.high_frequency_cutoff));
    ranked.extend(tail);

    if policy.filter_short {
        ranked.retain(|c| !is_noise(vocab.token(c.id)));
    }

    let exact: HashSet<TokenId> = bypass.iter().map(|c| c.id).collect();
    let mut seen = HashSet::with_capacity(bypass.len() + ranked.len());
    let mut results = Vec::with_capacity(policy.max_results.min(bypass.len() + ranked.len()));

    for candidate in bypass.into_iter().chain(ranked) {
        if results.len() == policy.max_results {
            break;
        }
        if !seen.insert(candidate.id) {
            continue;
        }
        results.push(MatchResult {
            token: vocab.token(candidate.id),
            score: candidate.score,
            exact: exact.contains(&candidate.id),
        });
    }

    results
}
