// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-query score accumulation.
//!
//! A `ScoreMap` holds the best raw score any signal gave each token. Scores
//! combine by `max`, never by sum: two signals agreeing on a candidate is not
//! more evidence than the stronger one alone. Because `max` is commutative,
//! associative and idempotent, signals can run in any order or in parallel
//! and the merged map is the same.

use crate::types::TokenId;

/// Dense token → best raw score. Zero means "no signal matched".
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMap {
    scores: Vec<f64>,
    matched: usize,
}

impl ScoreMap {
    /// An empty map sized for a vocabulary of `len` tokens.
    pub fn new(len: usize) -> Self {
        Self {
            scores: vec![0.0; len],
            matched: 0,
        }
    }

    /// Raise a token's score to `score` if that beats what it has.
    /// Non-positive and non-finite scores are ignored.
    #[inline]
    pub fn boost(&mut self, id: TokenId, score: f64) {
        debug_assert!(score.is_finite(), "signal produced {score}");
        if !(score.is_finite() && score > 0.0) {
            return;
        }
        let slot = &mut self.scores[id.as_usize()];
        if *slot == 0.0 {
            self.matched += 1;
        }
        if score > *slot {
            *slot = score;
        }
    }

    /// Pointwise max with another map over the same vocabulary.
    pub fn merge_from(&mut self, other: &ScoreMap) {
        debug_assert_eq!(self.scores.len(), other.scores.len());
        for (id, score) in other.iter() {
            self.boost(id, score);
        }
    }

    /// By-value `merge_from`, for folds and reductions.
    pub fn merge(mut self, other: &ScoreMap) -> Self {
        self.merge_from(other);
        self
    }

    pub fn get(&self, id: TokenId) -> Option<f64> {
        self.scores
            .get(id.as_usize())
            .copied()
            .filter(|score| *score > 0.0)
    }

    /// Number of tokens with a score.
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    /// Scored tokens in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, f64)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score > 0.0)
            .map(|(idx, score)| (TokenId(idx as u32), *score))
    }

    /// Keep only the `limit` best-scoring tokens (ties broken by lower id).
    pub fn retain_top(&mut self, limit: usize) {
        if self.matched <= limit {
            return;
        }
        let mut ranked: Vec<(TokenId, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        for (id, _) in &ranked[limit..] {
            self.scores[id.as_usize()] = 0.0;
        }
        self.matched = limit;
    }
}
