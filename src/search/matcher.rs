// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matcher: query in, ranked vocabulary tokens out.
//!
//! ```text
//! query ──► Query{raw, clean}
//!              │
//!              ▼
//!   ┌─────────────────────┐   one ScoreMap per signal (rayon),
//!   │  signal generators  │   merged with max
//!   └─────────────────────┘
//!              │ raw scores
//!              ▼
//!   ┌─────────────────────┐
//!   │     normalizer      │   × length factor × frequency factor
//!   └─────────────────────┘
//!              │ final scores
//!              ▼
//!   ┌─────────────────────┐
//!   │       ranker        │   bypass, sort, demote, filter, dedup, cap
//!   └─────────────────────┘
//! ```
//!
//! The vocabulary and phonetic buckets are built once and only read
//! afterwards, so a `Matcher` can serve any number of threads at once.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{MatcherConfig, SignalSpec};
use crate::error::ConfigError;
use crate::index::{PhoneticIndex, Vocabulary};
use crate::scoring::ranking::{rank, Candidate, RankPolicy};
use crate::scoring::{frequency_factor, length_factor, normalize_score, ScoreMap, EXACT_SCORE};
use crate::search::query::Query;
use crate::search::signals::SignalContext;
use crate::types::{MatchResult, Token, TokenId};

/// Multi-signal fuzzy matcher over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct Matcher {
    vocab: Arc<Vocabulary>,
    phonetic: PhoneticIndex,
    config: MatcherConfig,
}

impl Matcher {
    /// Validate the config and build the phonetic buckets.
    pub fn new(vocab: Arc<Vocabulary>, config: MatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let phonetic = PhoneticIndex::build(&vocab);
        info!(
            tokens = vocab.len(),
            phonetic_buckets = phonetic.len(),
            signals = config.signals.len(),
            "matcher ready"
        );
        Ok(Self {
            vocab,
            phonetic,
            config,
        })
    }

    /// Default configuration. Infallible: the defaults always validate.
    pub fn with_defaults(vocab: Arc<Vocabulary>) -> Self {
        let phonetic = PhoneticIndex::build(&vocab);
        Self {
            vocab,
            phonetic,
            config: MatcherConfig::default(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn phonetic(&self) -> &PhoneticIndex {
        &self.phonetic
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Rank vocabulary tokens against `query`, at most `max_results` of them.
    ///
    /// Deterministic for a given vocabulary and config. An empty or
    /// whitespace-only query gives an empty list.
    pub fn find_matches(&self, query: &str, max_results: usize) -> Vec<MatchResult<'_>> {
        let query = Query::new(query);
        if query.is_empty() {
            return Vec::new();
        }

        let raw = self.collect(&query);
        let results = self.rank(&query, &raw, max_results);
        debug!(
            query = query.raw(),
            candidates = raw.matched(),
            results = results.len(),
            "query matched"
        );
        results
    }

    /// `find_matches` capped at the configured `max_results`.
    pub fn search(&self, query: &str) -> Vec<MatchResult<'_>> {
        self.find_matches(query, self.config.max_results)
    }

    /// Search, and report which signals scored each result.
    ///
    /// Runs every signal on its own map, which costs more than `search`.
    pub fn explain(&self, query: &str) -> Explanation<'_> {
        let parsed = Query::new(query);
        if parsed.is_empty() {
            return Explanation {
                query: parsed,
                matches: Vec::new(),
            };
        }

        let ctx = self.context(&parsed);
        let per_signal: Vec<(String, ScoreMap)> = self
            .config
            .signals
            .iter()
            .map(|spec| {
                let mut map = ScoreMap::new(self.vocab.len());
                spec.apply(&ctx, &mut map);
                (spec.label(), map)
            })
            .collect();

        let raw = per_signal
            .iter()
            .fold(ScoreMap::new(self.vocab.len()), |acc, (_, map)| acc.merge(map));

        let matches = self
            .rank(&parsed, &raw, self.config.max_results)
            .into_iter()
            .map(|result| {
                let id = result.token.id;
                let signals = per_signal
                    .iter()
                    .filter_map(|(label, map)| {
                        map.get(id).map(|score| SignalHit {
                            signal: label.clone(),
                            score,
                        })
                    })
                    .collect();
                ExplainedMatch {
                    raw_score: raw.get(id).unwrap_or(0.0),
                    length_factor: self.length_factor(&parsed, result.token),
                    frequency_factor: self.frequency_factor(result.token),
                    signals,
                    result,
                }
            })
            .collect();

        Explanation {
            query: parsed,
            matches,
        }
    }

    fn context<'a>(&'a self, query: &'a Query) -> SignalContext<'a> {
        SignalContext {
            query,
            vocab: &self.vocab,
            phonetic: &self.phonetic,
        }
    }

    /// Run every signal and max-merge their scores.
    #[cfg(feature = "parallel")]
    fn collect(&self, query: &Query) -> ScoreMap {
        let ctx = self.context(query);
        let len = self.vocab.len();
        self.config
            .signals
            .par_iter()
            .map(|spec| {
                let mut map = ScoreMap::new(len);
                spec.apply(&ctx, &mut map);
                map
            })
            .reduce(|| ScoreMap::new(len), |acc, map| acc.merge(&map))
    }

    /// Sequential version for builds without rayon.
    #[cfg(not(feature = "parallel"))]
    fn collect(&self, query: &Query) -> ScoreMap {
        let ctx = self.context(query);
        let mut map = ScoreMap::new(self.vocab.len());
        for spec in &self.config.signals {
            spec.apply(&ctx, &mut map);
        }
        map
    }

    fn length_factor(&self, query: &Query, token: &Token) -> f64 {
        length_factor(
            candidate_len(token),
            query.effective_len(),
            self.config.length_bonus,
        )
    }

    fn frequency_factor(&self, token: &Token) -> f64 {
        frequency_factor(
            token.frequency(),
            self.vocab.max_frequency(),
            self.config.frequency,
        )
    }

    fn final_score(&self, query: &Query, id: TokenId, raw: f64) -> f64 {
        let token = self.vocab.token(id);
        normalize_score(
            raw,
            candidate_len(token),
            query.effective_len(),
            token.frequency(),
            self.vocab.max_frequency(),
            self.config.length_bonus,
            self.config.frequency,
        )
    }

    /// Score the exact signal would give, for bypass tokens it didn't see.
    fn exact_score(&self) -> f64 {
        self.config
            .signals
            .iter()
            .find_map(|spec| match spec {
                SignalSpec::Exact { score } => Some(*score),
                _ => None,
            })
            .unwrap_or(EXACT_SCORE)
    }

    fn rank(&self, query: &Query, raw: &ScoreMap, max_results: usize) -> Vec<MatchResult<'_>> {
        let bypass: Vec<Candidate> = if query.clean().is_empty() {
            Vec::new()
        } else {
            self.vocab
                .with_clean(query.clean())
                .iter()
                .map(|&id| {
                    let raw = raw.get(id).unwrap_or_else(|| self.exact_score());
                    Candidate {
                        id,
                        score: self.final_score(query, id, raw),
                    }
                })
                .collect()
        };

        let scored: Vec<Candidate> = raw
            .iter()
            .map(|(id, score)| Candidate {
                id,
                score: self.final_score(query, id, score),
            })
            .collect();

        rank(
            &self.vocab,
            bypass,
            scored,
            RankPolicy {
                high_frequency_cutoff: self.config.high_frequency_cutoff,
                max_results,
                filter_short: query.clean_len() > 1,
            },
        )
    }
}

/// Clean length, or text length for tokens with no alphanumerics.
fn candidate_len(token: &Token) -> usize {
    if token.clean_len() > 0 {
        token.clean_len()
    } else {
        token.len()
    }
}

/// One signal's raw score for a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalHit {
    pub signal: String,
    pub score: f64,
}

/// A result with the arithmetic that produced its score.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedMatch<'v> {
    #[serde(flatten)]
    pub result: MatchResult<'v>,
    /// Best score across signals, before normalization.
    pub raw_score: f64,
    pub length_factor: f64,
    pub frequency_factor: f64,
    /// Every signal that fired, in config order.
    pub signals: Vec<SignalHit>,
}

/// Output of `Matcher::explain`.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation<'v> {
    pub query: Query,
    pub matches: Vec<ExplainedMatch<'v>>,
}
