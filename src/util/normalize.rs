// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by the vocabulary builder and the query path.
//!
//! Three forms matter for matching:
//!
//! | Form      | Example (`"Don't,"`) | Used by |
//! |-----------|----------------------|---------|
//! | raw       | `Don't,`             | occurrence records, display |
//! | canonical | `don't`              | token identity, raw-form signals |
//! | clean     | `dont`               | structural signals, phonetic codes |
//!
//! Queries and vocabulary words must go through the same functions, otherwise
//! "café" in the corpus would never meet "cafe" in the query.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, and collapse whitespace.
///
/// - "Café" → "cafe"
/// - "naïve" → "naive"
/// - "  Hello   World " → "hello world"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Lowercases and collapses whitespace; diacritics survive.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks (Unicode category Mn) in the blocks we care about.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Canonical vocabulary form of a single word.
///
/// Normalizes, then trims non-alphanumeric characters from both ends. Inner
/// punctuation survives (`"Don't,"` → `"don't"`, `"(co-op)"` → `"co-op"`).
/// Returns an empty string for pure punctuation.
pub fn canonicalize(word: &str) -> String {
    let normalized = normalize(word);
    normalized
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}

/// Strip everything that isn't alphanumeric.
///
/// Expects already-normalized input; does not lowercase on its own.
pub fn clean(value: &str) -> String {
    value.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Length in Unicode scalar values. Every length comparison in the engine
/// goes through this, never `str::len`.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
