// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phonetic buckets: Double Metaphone code → tokens that sound like it.
//!
//! Every token is filed under its primary code and, when it differs, its
//! alternate code. A query then needs two hash lookups instead of encoding
//! the whole vocabulary on every request.

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::fuzzy::{double_metaphone, PhoneticCode};
use crate::index::vocabulary::Vocabulary;
use crate::types::TokenId;

/// Read-only code → token ids mapping derived from a vocabulary.
#[derive(Debug, Clone, Default)]
pub struct PhoneticIndex {
    buckets: HashMap<String, Vec<TokenId>>,
}

impl PhoneticIndex {
    /// Encode every token's clean form. Tokens without letters land nowhere.
    pub fn build(vocab: &Vocabulary) -> Self {
        let mut buckets: HashMap<String, Vec<TokenId>> = HashMap::new();

        // Filed in id order so every bucket stays sorted
        for (id, code) in encode_all(vocab) {
            for key in code.codes() {
                buckets.entry(key.to_string()).or_default().push(id);
            }
        }

        debug!(buckets = buckets.len(), "phonetic index built");
        Self { buckets }
    }

    /// Tokens filed under `code`, ascending id.
    pub fn bucket(&self, code: &str) -> &[TokenId] {
        self.buckets.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bucket sizes, largest first. For diagnostics.
    pub fn largest_buckets(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut sizes: Vec<(&str, usize)> = self
            .buckets
            .iter()
            .map(|(code, ids)| (code.as_str(), ids.len()))
            .collect();
        sizes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sizes.truncate(limit);
        sizes
    }
}

#[cfg(feature = "parallel")]
fn encode_all(vocab: &Vocabulary) -> Vec<(TokenId, PhoneticCode)> {
    vocab
        .tokens()
        .par_iter()
        .filter(|token| !token.clean.is_empty())
        .map(|token| (token.id, double_metaphone(&token.clean)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn encode_all(vocab: &Vocabulary) -> Vec<(TokenId, PhoneticCode)> {
    vocab
        .iter()
        .filter(|token| !token.clean.is_empty())
        .map(|token| (token.id, double_metaphone(&token.clean)))
        .collect()
}
