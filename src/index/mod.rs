// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the read-only structures every query shares.
//!
//! Two indexes, both built once before the first query:
//! - **Vocabulary**: every distinct word with its occurrences
//! - **Phonetic**: Double Metaphone code → sound-alike tokens
//!
//! `corpus` ties them to source text so results can be shown in context.

pub mod corpus;
pub mod phonetic;
pub mod vocabulary;

pub use corpus::Corpus;
pub use phonetic::PhoneticIndex;
pub use vocabulary::{tokenize, Vocabulary, VocabularyBuilder};
