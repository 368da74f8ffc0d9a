// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math that turns a raw signal score into a final score.
//!
//! Every signal speaks the same currency: a number around 60–105 where higher
//! means "more likely what the user meant". Signals never add up; a token's
//! raw score is the best any single signal gave it. Normalization then
//! corrects for two biases raw scores can't see:
//!
//! ```text
//! final = raw × length_factor(L, Q) × frequency_factor(freq, max_freq)
//! ```
//!
//! # Length factor
//!
//! Short candidates match long queries too easily (`"a"` is a perfect partial
//! match for `"cat"`), so they are scaled down by `L / Q`. Longer candidates
//! get a small bonus that grows slowly: `1 + β (L/Q - 1)`.
//!
//! # Frequency factor
//!
//! Very common words attract spurious fuzzy matches. With `f = freq / max_freq`
//! the factor is `max(0, 1 - w · g(f))` where `g` is `sqrt`, identity, or zero.
//!
//! # Score bands
//!
//! | Signal          | Score      |
//! |-----------------|------------|
//! | Exact           | 105        |
//! | Prefix          | 100        |
//! | Phonetic        | 100        |
//! | Levenshtein     | 100 − 10d  |
//! | Substring       | 95         |
//! | Transposition   | 95 / 85    |
//! | Suffix          | 90         |
//! | N-gram          | overlap×100|
//! | Ratios          | ratio      |

use crate::config::{DampingMode, FrequencyDamping};

// =============================================================================
// SIGNAL SCORES
// =============================================================================

/// Clean forms identical.
pub const EXACT_SCORE: f64 = 105.0;

/// Candidate starts with the query's leading characters.
pub const PREFIX_SCORE: f64 = 100.0;

/// How many leading query characters the prefix signal compares.
pub const PREFIX_CHARS: usize = 4;

/// Query contained in candidate.
pub const SUBSTRING_SCORE: f64 = 95.0;

/// Candidate ends with the query's trailing half.
pub const SUFFIX_SCORE: f64 = 90.0;

/// Shortest suffix worth comparing. Shorter queries skip the signal.
pub const SUFFIX_MIN_CHARS: usize = 4;

/// Damerau-Levenshtein distance 1, then 2.
pub const TRANSPOSITION_SCORES: [f64; 2] = [95.0, 85.0];

/// Levenshtein score at distance 0.
pub const LEVENSHTEIN_BASE: f64 = 100.0;

/// Levenshtein score lost per edit.
pub const LEVENSHTEIN_PENALTY: f64 = 10.0;

/// Queries up to this many chars allow 2 edits; longer ones allow 3.
pub const SHORT_QUERY_LEN: usize = 5;

/// Shared Double Metaphone code.
pub const PHONETIC_SCORE: f64 = 100.0;

/// Bigrams.
pub const NGRAM_SIZE: usize = 2;

/// Minimum Jaccard overlap of n-gram sets.
pub const NGRAM_THRESHOLD: f64 = 0.5;

/// Minimum ratio on clean forms.
pub const CLEAN_RATIO_THRESHOLD: f64 = 70.0;

/// Minimum ratio on raw forms.
pub const RAW_RATIO_THRESHOLD: f64 = 60.0;

/// Raw-form ratio scorers keep only their best candidates.
pub const RAW_RATIO_LIMIT: usize = 200;

/// Growth of the coverage factor per unit of excess length ratio.
pub const COVERAGE_BONUS: f64 = 0.1;

/// Coverage factor ceiling.
pub const COVERAGE_CAP: f64 = 1.2;

// =============================================================================
// NORMALIZATION AND RANKING DEFAULTS
// =============================================================================

/// β: bonus per unit of excess candidate/query length ratio.
pub const LENGTH_BONUS: f64 = 0.1;

/// How hard corpus frequency pulls a score down.
pub const FREQUENCY_WEIGHT: f64 = 0.1;

/// Three-letter tokens at least this frequent go to the back of the list.
pub const HIGH_FREQUENCY_CUTOFF: usize = 50;

/// Default result cap.
pub const DEFAULT_MAX_RESULTS: usize = 200;

/// Scale a score by how candidate length compares to query length.
///
/// `query_len == 0` can't happen for a query that produced candidates, but
/// returns 1.0 rather than dividing by zero.
pub fn length_factor(candidate_len: usize, query_len: usize, bonus: f64) -> f64 {
    if query_len == 0 {
        return 1.0;
    }
    let ratio = candidate_len as f64 / query_len as f64;
    if candidate_len <= query_len {
        ratio
    } else {
        1.0 + bonus * (ratio - 1.0)
    }
}

/// Damp a score by how common the token is. Always in `[0, 1]`.
pub fn frequency_factor(frequency: usize, max_frequency: usize, damping: FrequencyDamping) -> f64 {
    if max_frequency == 0 {
        return 1.0;
    }
    let f = frequency as f64 / max_frequency as f64;
    let g = match damping.mode {
        DampingMode::None => 0.0,
        DampingMode::Linear => f,
        DampingMode::Sqrt => f.sqrt(),
    };
    (1.0 - damping.weight * g).clamp(0.0, 1.0)
}

/// Raw score → final score.
pub fn normalize_score(
    raw: f64,
    candidate_len: usize,
    query_len: usize,
    frequency: usize,
    max_frequency: usize,
    length_bonus: f64,
    damping: FrequencyDamping,
) -> f64 {
    raw * length_factor(candidate_len, query_len, length_bonus)
        * frequency_factor(frequency, max_frequency, damping)
}
