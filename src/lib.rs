// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-signal fuzzy lexical matching over a fixed vocabulary.
//!
//! Given a query and the words of a corpus, `lexmatch` returns the words the
//! user most likely meant, tolerating typos, transpositions, stray
//! punctuation and phonetic near-misses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  index/     │────▶│  search/     │────▶│  scoring/    │
//! │ (Vocabulary,│     │ (Query,      │     │ (ScoreMap,   │
//! │  Phonetic)  │     │  signals)    │     │  ranking)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      fuzzy/                         │
//! │  (levenshtein, metaphone, ngram, ratio)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Every signal is independent and scores combine by `max`, so the signal
//! list is plain configuration (`MatcherConfig::signals`) rather than code.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use lexmatch::{Matcher, MatcherConfig, Vocabulary};
//!
//! let vocab = Vocabulary::from_corpus("the house on the hill\nher horse and a mouse").unwrap();
//! let matcher = Matcher::new(Arc::new(vocab), MatcherConfig::default()).unwrap();
//!
//! let results = matcher.search("hoose");
//! assert_eq!(results[0].word(), "house");
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

pub use config::{Coverage, DampingMode, FrequencyDamping, MatcherConfig, SignalSpec, TextForm};
pub use error::{ConfigError, CorpusError, VocabularyError};
pub use fuzzy::{double_metaphone, PhoneticCode, RatioKind};
pub use index::{Corpus, PhoneticIndex, Vocabulary, VocabularyBuilder};
pub use scoring::ScoreMap;
pub use search::{ExplainedMatch, Explanation, Matcher, Query, SignalHit};
pub use types::{MatchResult, Occurrence, Token, TokenId};
pub use util::normalize::normalize;
