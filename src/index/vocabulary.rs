// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary: every distinct word in the corpus, built once, read forever.
//!
//! Tokens are stored in a dense `Vec` so a `TokenId` is just an index. Two
//! side tables answer the lookups the matcher needs without scanning:
//!
//! - `by_text`: canonical word → id (deduplication while building)
//! - `by_clean`: cleaned word → ids in first-occurrence order (exact bypass)
//!
//! Several canonical words can share one clean form (`co-op` and `coop`),
//! which is why `by_clean` maps to a list.

use std::collections::HashMap;

use tracing::debug;

use crate::error::VocabularyError;
use crate::types::{Occurrence, Token, TokenId};
use crate::util::normalize::{canonicalize, char_len, clean};

/// Immutable word list with occurrence records.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tokens: Vec<Token>,
    by_text: HashMap<String, TokenId>,
    by_clean: HashMap<String, Vec<TokenId>>,
    max_frequency: usize,
    total_occurrences: usize,
}

impl Vocabulary {
    /// Tokenize a corpus and collect its vocabulary.
    ///
    /// Lines are split on whitespace; each piece loses its edge punctuation
    /// and is normalized. Pure punctuation pieces are skipped.
    pub fn from_corpus(text: &str) -> Result<Self, VocabularyError> {
        let mut builder = VocabularyBuilder::new();
        for (idx, line) in text.lines().enumerate() {
            builder.add_line(idx + 1, line)?;
        }
        Ok(builder.build())
    }

    /// Build from pre-tokenized entries.
    ///
    /// Words are canonicalized; every entry needs at least one occurrence and
    /// two entries may not canonicalize to the same word. Occurrences are
    /// sorted into corpus order.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = (S, Vec<Occurrence>)>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        let mut by_text = HashMap::new();

        for (word, mut occurrences) in entries {
            let word = word.as_ref();
            let text = canonicalize(word);
            if text.is_empty() {
                return Err(VocabularyError::EmptyToken {
                    raw: word.to_string(),
                });
            }
            if occurrences.is_empty() {
                return Err(VocabularyError::EmptyOccurrences { token: text });
            }
            if by_text.contains_key(&text) {
                return Err(VocabularyError::DuplicateToken { token: text });
            }

            let id = next_id(tokens.len())?;
            occurrences.sort_by_key(|o| o.position);
            by_text.insert(text.clone(), id);
            tokens.push(make_token(id, text, occurrences));
        }

        Ok(Self::assemble(tokens, by_text))
    }

    fn assemble(tokens: Vec<Token>, by_text: HashMap<String, TokenId>) -> Self {
        let mut by_clean: HashMap<String, Vec<TokenId>> = HashMap::new();
        let mut max_frequency = 0;
        let mut total_occurrences = 0;

        for token in &tokens {
            by_clean.entry(token.clean.clone()).or_default().push(token.id);
            max_frequency = max_frequency.max(token.frequency());
            total_occurrences += token.frequency();
        }

        for ids in by_clean.values_mut() {
            ids.sort_by_key(|id| {
                let token = &tokens[id.as_usize()];
                (token.first_occurrence().map(|o| o.position), *id)
            });
        }

        debug!(
            tokens = tokens.len(),
            occurrences = total_occurrences,
            max_frequency,
            "vocabulary built"
        );

        Self {
            tokens,
            by_text,
            by_clean,
            max_frequency,
            total_occurrences,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.as_usize())
    }

    /// Token by id. Ids handed out by this vocabulary are always valid.
    pub(crate) fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.as_usize()]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Look up a word after canonicalizing it the same way the corpus was.
    pub fn lookup(&self, word: &str) -> Option<&Token> {
        self.by_text
            .get(&canonicalize(word))
            .map(|id| self.token(*id))
    }

    /// Tokens whose clean form equals `clean`, earliest corpus occurrence first.
    pub fn with_clean(&self, clean: &str) -> &[TokenId] {
        self.by_clean.get(clean).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Frequency of the most common token (0 for an empty vocabulary).
    pub fn max_frequency(&self) -> usize {
        self.max_frequency
    }

    pub fn total_occurrences(&self) -> usize {
        self.total_occurrences
    }
}

fn next_id(len: usize) -> Result<TokenId, VocabularyError> {
    u32::try_from(len)
        .map(TokenId)
        .map_err(|_| VocabularyError::TooManyTokens {
            max: u32::MAX as usize,
        })
}

fn make_token(id: TokenId, text: String, occurrences: Vec<Occurrence>) -> Token {
    let clean = clean(&text);
    Token {
        id,
        text_len: char_len(&text),
        clean_len: char_len(&clean),
        text,
        clean,
        occurrences,
    }
}

/// Split a line into raw words: whitespace-separated, edge punctuation trimmed.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
        .map(|piece| piece.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|piece| !piece.is_empty())
}

/// Incremental vocabulary construction in corpus order.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    tokens: Vec<Token>,
    by_text: HashMap<String, TokenId>,
    position: usize,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one word seen on `line`. Returns the token it landed in, or
    /// `None` if the word has no alphanumeric content.
    pub fn add_word(&mut self, raw: &str, line: usize) -> Result<Option<TokenId>, VocabularyError> {
        let text = canonicalize(raw);
        if text.is_empty() {
            return Ok(None);
        }

        let occurrence = Occurrence::new(line, self.position, raw);
        self.position += 1;

        if let Some(&id) = self.by_text.get(&text) {
            self.tokens[id.as_usize()].occurrences.push(occurrence);
            return Ok(Some(id));
        }

        let id = next_id(self.tokens.len())?;
        self.by_text.insert(text.clone(), id);
        self.tokens.push(make_token(id, text, vec![occurrence]));
        Ok(Some(id))
    }

    /// Tokenize and record every word of one source line.
    pub fn add_line(&mut self, line_number: usize, line: &str) -> Result<(), VocabularyError> {
        for raw in tokenize(line) {
            self.add_word(raw, line_number)?;
        }
        Ok(())
    }

    pub fn build(self) -> Vocabulary {
        Vocabulary::assemble(self.tokens, self.by_text)
    }
}
