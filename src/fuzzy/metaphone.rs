// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Double Metaphone phonetic encoding.
//!
//! Every word gets a primary code and an alternate code for the
//! pronunciations English borrows from other languages ("Schmidt" as both
//! `XMT` and `SMT`). Two words sound alike when any of their codes agree.
//!
//! Encoding is done by `rphonetic`. Input is expected to be normalized
//! (lowercase, diacritics stripped); anything that is not an ASCII letter
//! is dropped before encoding.

use rphonetic::DoubleMetaphone;
use serde::Serialize;

/// Codes are truncated to this many characters.
pub const MAX_CODE_LEN: usize = 4;

/// Primary and alternate codes for one word.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PhoneticCode {
    pub primary: String,
    pub alternate: String,
}

impl PhoneticCode {
    /// Distinct, non-empty codes: primary first, alternate only if different.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        let alternate = (!self.alternate.is_empty() && self.alternate != self.primary)
            .then_some(self.alternate.as_str());
        (!self.primary.is_empty())
            .then_some(self.primary.as_str())
            .into_iter()
            .chain(alternate)
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.alternate.is_empty()
    }
}

/// Encode a word into its primary and alternate Double Metaphone codes.
///
/// ```
/// use lexmatch::double_metaphone;
///
/// let code = double_metaphone("smith");
/// assert_eq!(code.primary, "SM0");
/// assert_eq!(code.alternate, "XMT");
/// ```
pub fn double_metaphone(word: &str) -> PhoneticCode {
    let letters: String = word.chars().filter(char::is_ascii_alphabetic).collect();
    if letters.is_empty() {
        return PhoneticCode::default();
    }

    let result = DoubleMetaphone::default().double_metaphone(&letters);
    PhoneticCode {
        primary: truncate(&result.primary()),
        alternate: truncate(&result.alternate()),
    }
}

fn truncate(code: &str) -> String {
    code.chars().take(MAX_CODE_LEN).collect()
}
