// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! Signals write raw scores into a `ScoreMap`; `core` normalizes them for
//! length and frequency; `ranking` decides the final order.

pub mod accumulator;
pub mod core;
pub mod ranking;

pub use accumulator::ScoreMap;
pub use self::core::*;
