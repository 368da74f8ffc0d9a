// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Source text plus the vocabulary extracted from it.
//!
//! The matcher only ever sees the vocabulary. Callers that want to show
//! *where* a word appeared keep the `Corpus` around and resolve occurrence
//! lines through it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::CorpusError;
use crate::index::vocabulary::Vocabulary;

/// A loaded corpus: its lines and its vocabulary.
#[derive(Debug, Clone)]
pub struct Corpus {
    lines: Vec<String>,
    vocabulary: Arc<Vocabulary>,
}

impl Corpus {
    pub fn from_text(text: &str) -> Result<Self, CorpusError> {
        let vocabulary = Vocabulary::from_corpus(text)?;
        Ok(Self {
            lines: text.lines().map(str::to_string).collect(),
            vocabulary: Arc::new(vocabulary),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_text(&text)?;
        info!(
            path = %path.display(),
            lines = corpus.lines.len(),
            tokens = corpus.vocabulary.len(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Shared handle to the vocabulary, ready for `Matcher::new`.
    pub fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    /// Source line by 1-based number.
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
