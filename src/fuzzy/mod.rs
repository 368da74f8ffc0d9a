// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String similarity primitives: typo tolerance, sound-alikes, overlap.
//!
//! Nothing in here knows about vocabularies or scores. These are plain
//! functions over two strings; `search::signals` turns them into evidence.

mod levenshtein;
pub mod metaphone;
pub mod ngram;
pub mod ratio;

pub use levenshtein::*;
pub use metaphone::{double_metaphone, PhoneticCode};
pub use ratio::RatioKind;
