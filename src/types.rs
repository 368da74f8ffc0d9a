// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a vocabulary and its match results.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Token**: `!occurrences.is_empty()`. A word the corpus never used has
//!   no business in the vocabulary; `Vocabulary` rejects it at construction.
//!
//! - **TokenId**: `id < vocabulary.len()` and `vocabulary[id].id == id`.
//!   Ids are dense so per-query score maps can be plain vectors.
//!
//! - **Occurrence**: `line >= 1`, positions strictly increase in corpus order.

use serde::{Deserialize, Serialize};

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe token identifier: a dense index into the vocabulary.
///
/// Prevents accidentally passing a frequency or a length where a token is
/// expected. Ids follow first-seen order when built from a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// VOCABULARY TYPES
// =============================================================================

/// One place a word appeared in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// 1-based source line.
    pub line: usize,
    /// 0-based word ordinal across the whole corpus.
    pub position: usize,
    /// Spelling exactly as written, edge punctuation trimmed.
    pub raw: String,
}

impl Occurrence {
    pub fn new(line: usize, position: usize, raw: impl Into<String>) -> Self {
        Self {
            line,
            position,
            raw: raw.into(),
        }
    }
}

/// A canonical vocabulary word with every place it occurred.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub id: TokenId,
    /// Canonical form: normalized, lowercase, edge punctuation trimmed.
    pub text: String,
    /// `text` with every non-alphanumeric character removed.
    pub clean: String,
    /// Corpus order. Never empty.
    pub occurrences: Vec<Occurrence>,
    #[serde(skip)]
    pub(crate) text_len: usize,
    #[serde(skip)]
    pub(crate) clean_len: usize,
}

impl Token {
    /// How many times the word appears in the corpus.
    #[inline]
    pub fn frequency(&self) -> usize {
        self.occurrences.len()
    }

    /// Canonical length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.text_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text_len == 0
    }

    /// Cleaned length in characters.
    #[inline]
    pub fn clean_len(&self) -> usize {
        self.clean_len
    }

    /// First appearance in the corpus.
    pub fn first_occurrence(&self) -> Option<&Occurrence> {
        self.occurrences.first()
    }

    /// Distinct source lines, ascending.
    pub fn lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.occurrences.iter().map(|o| o.line).collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    pub fn is_ascii(&self) -> bool {
        self.text.is_ascii()
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// What callers get back: a vocabulary token and how strongly it matched.
///
/// Borrows from the vocabulary so a result list costs nothing beyond the
/// vector itself. Serializes with the token inlined.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'v> {
    pub token: &'v Token,
    /// Normalized score. Exact matches keep their score but are ranked by
    /// corpus position, so scores are not monotone across the exact block.
    pub score: f64,
    /// Whether this result came from the literal-exact bypass.
    pub exact: bool,
}

impl<'v> MatchResult<'v> {
    pub fn word(&self) -> &'v str {
        &self.token.text
    }

    pub fn occurrences(&self) -> &'v [Occurrence] {
        &self.token.occurrences
    }
}
