// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matcher configuration: which signals run, and every number they use.
//!
//! The signal set is data, not code. A config is a list of `SignalSpec`
//! variants, each a scorer plus its own threshold and score band; the
//! matcher runs whatever the list contains. Omitted top-level fields fall
//! back to the defaults in `scoring::core`.
//!
//! ```json
//! {
//!   "max_results": 50,
//!   "frequency": { "mode": "sqrt", "weight": 0.2 },
//!   "signals": [
//!     { "kind": "exact", "score": 105 },
//!     { "kind": "levenshtein", "base": 100, "penalty": 10, "short_query_len": 5 },
//!     { "kind": "ratio", "ratio": "partial", "form": "clean", "threshold": 75 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fuzzy::RatioKind;
use crate::scoring::core::*;

/// Which form of the query and candidate a scorer compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextForm {
    /// Alphanumerics only (`"don't"` → `"dont"`).
    Clean,
    /// Normalized with punctuation kept.
    Raw,
}

/// Length-coverage scaling for ratio scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    /// Growth per unit of excess length ratio for over-length candidates.
    pub bonus: f64,
    /// Upper bound on the factor.
    pub cap: f64,
}

impl Default for Coverage {
    fn default() -> Self {
        Self {
            bonus: COVERAGE_BONUS,
            cap: COVERAGE_CAP,
        }
    }
}

/// One similarity hypothesis and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalSpec {
    /// Clean forms are identical.
    Exact { score: f64 },
    /// Candidate starts with the first `max_chars` query chars (0 = all).
    Prefix { score: f64, max_chars: usize },
    /// Query is contained in the candidate.
    Substring { score: f64 },
    /// Candidate ends with the trailing half of the query, at least
    /// `min_chars` long.
    Suffix { score: f64, min_chars: usize },
    /// Damerau-Levenshtein on clean forms; `scores[d - 1]` for distance `d`.
    Transposition { scores: Vec<f64> },
    /// Levenshtein on raw forms: `base - penalty * d`, within 2 edits for
    /// queries up to `short_query_len` chars, 3 beyond.
    Levenshtein {
        base: f64,
        penalty: f64,
        short_query_len: usize,
    },
    /// Any query Double Metaphone code matches a bucket.
    Phonetic { score: f64 },
    /// Jaccard overlap of character n-grams at or above `threshold` (0..=1).
    Ngram { n: usize, threshold: f64 },
    /// A fuzzy ratio at or above `threshold` (0..=100).
    Ratio {
        ratio: RatioKind,
        form: TextForm,
        threshold: f64,
        /// Keep only the best `limit` candidates.
        #[serde(default)]
        limit: Option<usize>,
        #[serde(default)]
        coverage: Option<Coverage>,
    },
}

impl SignalSpec {
    pub fn name(&self) -> &'static str {
        match self {
            SignalSpec::Exact { .. } => "exact",
            SignalSpec::Prefix { .. } => "prefix",
            SignalSpec::Substring { .. } => "substring",
            SignalSpec::Suffix { .. } => "suffix",
            SignalSpec::Transposition { .. } => "transposition",
            SignalSpec::Levenshtein { .. } => "levenshtein",
            SignalSpec::Phonetic { .. } => "phonetic",
            SignalSpec::Ngram { .. } => "ngram",
            SignalSpec::Ratio { .. } => "ratio",
        }
    }

    /// Does this signal read only the clean query form?
    pub fn needs_clean(&self) -> bool {
        match self {
            SignalSpec::Levenshtein { .. } => false,
            SignalSpec::Ratio { form, .. } => *form == TextForm::Clean,
            _ => true,
        }
    }

    /// The signal list used when a config doesn't provide one.
    pub fn default_set() -> Vec<SignalSpec> {
        vec![
            SignalSpec::Exact { score: EXACT_SCORE },
            SignalSpec::Prefix {
                score: PREFIX_SCORE,
                max_chars: PREFIX_CHARS,
            },
            SignalSpec::Substring {
                score: SUBSTRING_SCORE,
            },
            SignalSpec::Suffix {
                score: SUFFIX_SCORE,
                min_chars: SUFFIX_MIN_CHARS,
            },
            SignalSpec::Transposition {
                scores: TRANSPOSITION_SCORES.to_vec(),
            },
            SignalSpec::Levenshtein {
                base: LEVENSHTEIN_BASE,
                penalty: LEVENSHTEIN_PENALTY,
                short_query_len: SHORT_QUERY_LEN,
            },
            SignalSpec::Phonetic {
                score: PHONETIC_SCORE,
            },
            SignalSpec::Ngram {
                n: NGRAM_SIZE,
                threshold: NGRAM_THRESHOLD,
            },
            SignalSpec::Ratio {
                ratio: RatioKind::TokenSort,
                form: TextForm::Clean,
                threshold: CLEAN_RATIO_THRESHOLD,
                limit: None,
                coverage: None,
            },
            SignalSpec::Ratio {
                ratio: RatioKind::Partial,
                form: TextForm::Clean,
                threshold: CLEAN_RATIO_THRESHOLD,
                limit: None,
                coverage: None,
            },
            SignalSpec::Ratio {
                ratio: RatioKind::TokenSort,
                form: TextForm::Raw,
                threshold: RAW_RATIO_THRESHOLD,
                limit: Some(RAW_RATIO_LIMIT),
                coverage: None,
            },
            SignalSpec::Ratio {
                ratio: RatioKind::Partial,
                form: TextForm::Raw,
                threshold: RAW_RATIO_THRESHOLD,
                limit: Some(RAW_RATIO_LIMIT),
                coverage: None,
            },
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let signal = self.name();
        match self {
            SignalSpec::Exact { score }
            | SignalSpec::Prefix { score, .. }
            | SignalSpec::Substring { score }
            | SignalSpec::Phonetic { score } => check_score(signal, *score),
            SignalSpec::Suffix { score, min_chars } => {
                check_score(signal, *score)?;
                if *min_chars == 0 {
                    return Err(ConfigError::InvalidParameter {
                        signal,
                        reason: "min_chars must be at least 1".to_string(),
                    });
                }
                Ok(())
            }
            SignalSpec::Transposition { scores } => {
                if scores.is_empty() {
                    return Err(ConfigError::InvalidParameter {
                        signal,
                        reason: "needs a score for at least distance 1".to_string(),
                    });
                }
                scores.iter().try_for_each(|s| check_score(signal, *s))
            }
            SignalSpec::Levenshtein { base, penalty, .. } => {
                check_score(signal, *base)?;
                check_weight("levenshtein.penalty", *penalty)
            }
            SignalSpec::Ngram { n, threshold } => {
                if *n == 0 {
                    return Err(ConfigError::InvalidParameter {
                        signal,
                        reason: "n must be at least 1".to_string(),
                    });
                }
                if !(0.0..=1.0).contains(threshold) {
                    return Err(ConfigError::ThresholdOutOfRange {
                        signal,
                        value: *threshold,
                    });
                }
                Ok(())
            }
            SignalSpec::Ratio {
                threshold,
                limit,
                coverage,
                ..
            } => {
                if !(0.0..=100.0).contains(threshold) {
                    return Err(ConfigError::ThresholdOutOfRange {
                        signal,
                        value: *threshold,
                    });
                }
                if *limit == Some(0) {
                    return Err(ConfigError::InvalidParameter {
                        signal,
                        reason: "limit must be at least 1".to_string(),
                    });
                }
                if let Some(coverage) = coverage {
                    check_weight("coverage.bonus", coverage.bonus)?;
                    if !coverage.cap.is_finite() || coverage.cap < 1.0 {
                        return Err(ConfigError::InvalidParameter {
                            signal,
                            reason: format!("coverage cap {} must be at least 1", coverage.cap),
                        });
                    }
                }
                Ok(())
            }
        }
    }
}

fn check_score(signal: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScore { signal, value })
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight { name, value })
    }
}

/// How corpus frequency damps a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DampingMode {
    None,
    Linear,
    Sqrt,
}

/// `factor = max(0, 1 - weight * g(freq / max_freq))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyDamping {
    pub mode: DampingMode,
    pub weight: f64,
}

impl Default for FrequencyDamping {
    fn default() -> Self {
        Self {
            mode: DampingMode::Sqrt,
            weight: FREQUENCY_WEIGHT,
        }
    }
}

/// Everything tunable about a matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Result cap used by `Matcher::search`.
    pub max_results: usize,
    /// β in the over-length bonus `1 + β (L/Q - 1)`.
    pub length_bonus: f64,
    pub frequency: FrequencyDamping,
    /// Three-letter tokens at or above this frequency are tail-demoted.
    pub high_frequency_cutoff: usize,
    pub signals: Vec<SignalSpec>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            length_bonus: LENGTH_BONUS,
            frequency: FrequencyDamping::default(),
            high_frequency_cutoff: HIGH_FREQUENCY_CUTOFF,
            signals: SignalSpec::default_set(),
        }
    }
}

impl MatcherConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Replace the signal list.
    pub fn with_signals(mut self, signals: Vec<SignalSpec>) -> Self {
        self.signals = signals;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }
        if self.signals.is_empty() {
            return Err(ConfigError::NoSignals);
        }
        check_weight("length_bonus", self.length_bonus)?;
        check_weight("frequency.weight", self.frequency.weight)?;
        self.signals.iter().try_for_each(SignalSpec::validate)
    }
}
