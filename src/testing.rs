// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::sync::Arc;

use crate::config::MatcherConfig;
use crate::index::Vocabulary;
use crate::search::Matcher;
use crate::types::Occurrence;

/// Vocabulary from `(word, frequency)` pairs.
///
/// Occurrences are laid out in the given order, one per line, so the first
/// pair has the earliest first occurrence. Panics on invalid input.
pub fn vocab_with_frequencies(entries: &[(&str, usize)]) -> Vocabulary {
    let mut position = 0;
    let entries: Vec<(&str, Vec<Occurrence>)> = entries
        .iter()
        .map(|&(word, frequency)| {
            let occurrences = (0..frequency)
                .map(|_| {
                    position += 1;
                    Occurrence::new(position, position - 1, word)
                })
                .collect();
            (word, occurrences)
        })
        .collect();
    Vocabulary::from_entries(entries).expect("test vocabulary must be valid")
}

/// Default-configured matcher over `(word, frequency)` pairs.
pub fn matcher_with_frequencies(entries: &[(&str, usize)]) -> Matcher {
    Matcher::with_defaults(Arc::new(vocab_with_frequencies(entries)))
}

/// Default-configured matcher over a corpus string.
pub fn matcher_for(corpus: &str) -> Matcher {
    let vocab = Vocabulary::from_corpus(corpus).expect("test corpus must be valid");
    Matcher::with_defaults(Arc::new(vocab))
}

/// Matcher with a custom config. Panics if the config is invalid.
pub fn matcher_with_config(corpus: &str, config: MatcherConfig) -> Matcher {
    let vocab = Vocabulary::from_corpus(corpus).expect("test corpus must be valid");
    Matcher::new(Arc::new(vocab), config).expect("test config must be valid")
}

/// Words of a result list, in order.
pub fn words(matcher: &Matcher, query: &str) -> Vec<String> {
    matcher
        .search(query)
        .iter()
        .map(|r| r.word().to_string())
        .collect()
}
