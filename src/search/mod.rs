// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-time matching.
//!
//! - `query`: raw and clean forms of the user's input
//! - `signals`: the similarity generators
//! - `matcher`: the pipeline that runs them and ranks the result

pub mod matcher;
pub mod query;
pub mod signals;

pub use matcher::{ExplainedMatch, Explanation, Matcher, SignalHit};
pub use query::Query;
pub use signals::SignalContext;
