// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexmatch command-line interface.
//!
//! Three subcommands: `search` to match a query against a corpus, `inspect`
//! to look at the vocabulary a corpus produces, and `encode` to print the
//! phonetic codes the matcher would use for a word.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lexmatch",
    about = "Multi-signal fuzzy word matching over a text corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the corpus words closest to a query
    Search {
        /// Plain-text corpus, one or more words per line
        #[arg(short, long)]
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Matcher configuration (JSON); defaults apply to omitted fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Show which signals scored each result
        #[arg(long)]
        explain: bool,
    },

    /// Show vocabulary statistics for a corpus
    Inspect {
        /// Plain-text corpus
        #[arg(short, long)]
        corpus: PathBuf,

        /// How many of the most frequent words to list
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Print Double Metaphone codes
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,

        /// Print JSON instead of tab-separated codes
        #[arg(long)]
        json: bool,
    },
}
