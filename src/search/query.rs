// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two forms of a query every signal reads.

use serde::Serialize;

use crate::util::normalize::{char_len, clean, normalize};

/// A user query, normalized once up front.
///
/// `clean` can be empty while `raw` is not (`"--"`, `"?!"`). That is a
/// query on which only raw-form signals fire, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    raw: String,
    clean: String,
    #[serde(skip)]
    raw_len: usize,
    #[serde(skip)]
    clean_len: usize,
}

impl Query {
    pub fn new(input: &str) -> Self {
        let raw = normalize(input);
        let clean = clean(&raw);
        Self {
            raw_len: char_len(&raw),
            clean_len: char_len(&clean),
            raw,
            clean,
        }
    }

    /// Trimmed, lowercased, diacritics stripped, punctuation kept.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Alphanumerics only.
    pub fn clean(&self) -> &str {
        &self.clean
    }

    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    pub fn clean_len(&self) -> usize {
        self.clean_len
    }

    /// Nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// `Q` in the length factor: clean length, or raw length for a query
    /// with no alphanumerics.
    pub fn effective_len(&self) -> usize {
        if self.clean_len > 0 {
            self.clean_len
        } else {
            self.raw_len
        }
    }
}
