// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Signal generators: one similarity hypothesis each.
//!
//! A generator reads the query, the vocabulary and the phonetic buckets, and
//! boosts every token it believes in. It never reads another generator's
//! output, so the list can run in any order or all at once.
//!
//! | Signal          | Compares                     | Cost per token |
//! |-----------------|------------------------------|----------------|
//! | exact           | clean forms                  | O(1) lookup    |
//! | prefix/substring/suffix | clean forms          | O(n)           |
//! | transposition   | clean forms, ≤ 2 edits       | O(nm)          |
//! | levenshtein     | raw forms, adaptive bound    | O(nm), early exit |
//! | phonetic        | metaphone buckets            | O(1) lookup    |
//! | ngram           | clean n-gram sets            | O(n)           |
//! | ratio           | clean or raw forms           | O(nm)          |

use crate::config::{Coverage, SignalSpec, TextForm};
use crate::fuzzy::ratio::coverage_factor;
use crate::fuzzy::{damerau_bounded, double_metaphone, levenshtein_bounded, ngram, RatioKind};
use crate::index::{PhoneticIndex, Vocabulary};
use crate::scoring::ScoreMap;
use crate::search::query::Query;
use crate::types::Token;

/// Everything a generator may read.
#[derive(Debug, Clone, Copy)]
pub struct SignalContext<'a> {
    pub query: &'a Query,
    pub vocab: &'a Vocabulary,
    pub phonetic: &'a PhoneticIndex,
}

impl SignalSpec {
    /// Human-readable name including the variant's distinguishing parameters.
    pub fn label(&self) -> String {
        match self {
            SignalSpec::Ngram { n, .. } => format!("ngram({n})"),
            SignalSpec::Ratio { ratio, form, .. } => {
                let form = match form {
                    TextForm::Clean => "clean",
                    TextForm::Raw => "raw",
                };
                format!("{}({form})", ratio.name())
            }
            other => other.name().to_string(),
        }
    }

    /// Boost every token this signal matches.
    pub fn apply(&self, ctx: &SignalContext<'_>, scores: &mut ScoreMap) {
        if self.needs_clean() && ctx.query.clean().is_empty() {
            return;
        }

        let query = ctx.query;
        let q = query.clean();
        match self {
            SignalSpec::Exact { score } => {
                for &id in ctx.vocab.with_clean(q) {
                    scores.boost(id, *score);
                }
            }
            SignalSpec::Prefix { score, max_chars } => {
                let take = if *max_chars == 0 {
                    query.clean_len()
                } else {
                    (*max_chars).min(query.clean_len())
                };
                let prefix: String = q.chars().take(take).collect();
                boost_where(ctx.vocab, scores, *score, |t| t.clean.starts_with(&prefix));
            }
            SignalSpec::Substring { score } => {
                boost_where(ctx.vocab, scores, *score, |t| t.clean.contains(q));
            }
            SignalSpec::Suffix { score, min_chars } => {
                let len = query.clean_len();
                if len < *min_chars {
                    return;
                }
                let take = len.div_ceil(2).max(*min_chars);
                let suffix: String = q.chars().skip(len - take).collect();
                boost_where(ctx.vocab, scores, *score, |t| t.clean.ends_with(&suffix));
            }
            SignalSpec::Transposition { scores: bands } => {
                for token in ctx.vocab.iter() {
                    if let Some(d) = damerau_bounded(q, &token.clean, bands.len()) {
                        if d > 0 {
                            scores.boost(token.id, bands[d - 1]);
                        }
                    }
                }
            }
            SignalSpec::Levenshtein {
                base,
                penalty,
                short_query_len,
            } => {
                let raw = query.raw();
                let max = crate::fuzzy::adaptive_threshold(query.raw_len(), *short_query_len);
                for token in ctx.vocab.iter() {
                    if let Some(d) = levenshtein_bounded(raw, &token.text, max) {
                        scores.boost(token.id, base - penalty * d as f64);
                    }
                }
            }
            SignalSpec::Phonetic { score } => {
                let code = double_metaphone(q);
                for key in code.codes() {
                    for &id in ctx.phonetic.bucket(key) {
                        scores.boost(id, *score);
                    }
                }
            }
            SignalSpec::Ngram { n, threshold } => {
                let query_grams = ngram::ngrams(q, *n);
                for token in ctx.vocab.iter() {
                    let overlap = ngram::jaccard(&query_grams, &ngram::ngrams(&token.clean, *n));
                    if overlap >= *threshold {
                        scores.boost(token.id, overlap * 100.0);
                    }
                }
            }
            SignalSpec::Ratio {
                ratio,
                form,
                threshold,
                limit,
                coverage,
            } => match limit {
                Some(limit) => {
                    let mut local = ScoreMap::new(ctx.vocab.len());
                    apply_ratio(ctx, *ratio, *form, *threshold, *coverage, &mut local);
                    local.retain_top(*limit);
                    scores.merge_from(&local);
                }
                None => apply_ratio(ctx, *ratio, *form, *threshold, *coverage, scores),
            },
        }
    }
}

fn boost_where(
    vocab: &Vocabulary,
    scores: &mut ScoreMap,
    score: f64,
    matches: impl Fn(&Token) -> bool,
) {
    for token in vocab.iter().filter(|t| matches(t)) {
        scores.boost(token.id, score);
    }
}

fn apply_ratio(
    ctx: &SignalContext<'_>,
    ratio: RatioKind,
    form: TextForm,
    threshold: f64,
    coverage: Option<Coverage>,
    scores: &mut ScoreMap,
) {
    let (query, query_len) = match form {
        TextForm::Clean => (ctx.query.clean(), ctx.query.clean_len()),
        TextForm::Raw => (ctx.query.raw(), ctx.query.raw_len()),
    };

    for token in ctx.vocab.iter() {
        let (candidate, candidate_len) = match form {
            TextForm::Clean => (token.clean.as_str(), token.clean_len()),
            TextForm::Raw => (token.text.as_str(), token.len()),
        };
        let value = ratio.compute(query, candidate);
        if value < threshold {
            continue;
        }
        let factor = coverage
            .map(|c| coverage_factor(candidate_len, query_len, c.bonus, c.cap))
            .unwrap_or(1.0);
        scores.boost(token.id, value * factor);
    }
}
