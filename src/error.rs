// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction-time errors.
//!
//! Matching itself cannot fail: an empty or unmatchable query is an empty
//! result, not an error. Everything that can go wrong goes wrong while
//! building the vocabulary or the matcher, before the first query is served.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid matcher configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{signal}: threshold {value} is out of range")]
    ThresholdOutOfRange { signal: &'static str, value: f64 },

    #[error("{signal}: score {value} must be finite and positive")]
    InvalidScore { signal: &'static str, value: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("{signal}: {reason}")]
    InvalidParameter {
        signal: &'static str,
        reason: String,
    },

    #[error("max_results must be at least 1")]
    ZeroMaxResults,

    #[error("at least one signal must be configured")]
    NoSignals,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Vocabulary that violates the data-model invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("token '{token}' has no occurrences")]
    EmptyOccurrences { token: String },

    #[error("token '{token}' appears twice")]
    DuplicateToken { token: String },

    #[error("token '{raw}' has an empty canonical form")]
    EmptyToken { raw: String },

    #[error("vocabulary exceeds {max} tokens")]
    TooManyTokens { max: usize },
}

/// Failure to turn a corpus file into a vocabulary.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}
