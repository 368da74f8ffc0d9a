// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use lexmatch::{double_metaphone, Corpus, MatchResult, Matcher, MatcherConfig, PhoneticCode};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

/// Longest source line excerpt shown under a result.
const EXCERPT_CHARS: usize = 60;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            config,
            json,
            explain,
        } => run_search(&corpus, &query, limit, config.as_deref(), json, explain),
        Commands::Inspect { corpus, top } => run_inspect(&corpus, top),
        Commands::Encode { words, json } => run_encode(&words, json),
    };

    if let Err(e) = outcome {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load(corpus: &Path, config: Option<&Path>) -> Result<(Corpus, Matcher)> {
    let corpus = Corpus::from_path(corpus)
        .with_context(|| format!("loading corpus {}", corpus.display()))?;
    let config = match config {
        Some(path) => MatcherConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MatcherConfig::default(),
    };
    let matcher = Matcher::new(corpus.vocabulary(), config).context("invalid matcher config")?;
    Ok((corpus, matcher))
}

fn run_search(
    corpus_path: &Path,
    query: &str,
    limit: usize,
    config: Option<&Path>,
    json: bool,
    explain: bool,
) -> Result<()> {
    let (corpus, matcher) = load(corpus_path, config)?;

    if explain {
        let mut explanation = matcher.explain(query);
        explanation.matches.truncate(limit);
        if json {
            return write_json(&explanation);
        }
        section_top(&format!("EXPLAIN \"{}\"", explanation.query.raw()));
        if explanation.matches.is_empty() {
            row(" no matches");
        }
        for entry in &explanation.matches {
            print_result(&corpus, &entry.result);
            row(&format!(
                "     raw {:.2} × length {:.3} × frequency {:.3}",
                entry.raw_score, entry.length_factor, entry.frequency_factor
            ));
            let hits: Vec<String> = entry
                .signals
                .iter()
                .map(|hit| format!("{} {:.1}", signal_badge(&hit.signal), hit.score))
                .collect();
            row(&format!("     {}", hits.join("  ")));
        }
        section_bot();
        return Ok(());
    }

    let results = matcher.find_matches(query, limit);
    if json {
        return write_json(&results);
    }

    section_top(&format!("RESULTS \"{}\"", query.trim()));
    if results.is_empty() {
        row(" no matches");
    }
    for result in &results {
        print_result(&corpus, result);
    }
    section_bot();
    Ok(())
}

fn print_result(corpus: &Corpus, result: &MatchResult<'_>) {
    let word = themed(Role::Word, &[BOLD], result.word());
    row(&format!(
        " {} {} {}  {}",
        score_value(result.score),
        exact_badge(result.exact),
        pad_right(&word, 20),
        themed(Role::Muted, &[], &format!("×{}", result.token.frequency())),
    ));

    let lines = result.token.lines();
    let excerpt = result
        .token
        .first_occurrence()
        .and_then(|o| corpus.line(o.line))
        .map(|line| line.trim().chars().take(EXCERPT_CHARS).collect::<String>())
        .unwrap_or_default();
    row(&format!(
        "     {} {}",
        themed(Role::Muted, &[], &format!("lines {}:", line_list(&lines, 8))),
        themed(Role::Muted, &[DIM], &excerpt),
    ));
}

fn run_inspect(corpus_path: &Path, top: usize) -> Result<()> {
    let (corpus, matcher) = load(corpus_path, None)?;
    let vocab = matcher.vocabulary();

    section_top("CORPUS");
    row(&format!(" {} {}", pad_right("lines", 20), corpus.line_count()));
    row(&format!(" {} {}", pad_right("distinct words", 20), vocab.len()));
    row(&format!(" {} {}", pad_right("occurrences", 20), vocab.total_occurrences()));
    row(&format!(" {} {}", pad_right("phonetic buckets", 20), matcher.phonetic().len()));
    let non_ascii = vocab.iter().filter(|t| !t.is_ascii()).count();
    row(&format!(" {} {}", pad_right("non-ASCII words", 20), non_ascii));

    let mut by_frequency: Vec<_> = vocab.iter().collect();
    by_frequency.sort_by(|a, b| b.frequency().cmp(&a.frequency()).then_with(|| a.id.cmp(&b.id)));
    section_bot();

    section_top("MOST FREQUENT");
    for token in by_frequency.iter().take(top) {
        row(&format!(
            " {} {}",
            pad_left(&token.frequency().to_string(), 8),
            themed(Role::Word, &[], &token.text)
        ));
    }

    section_bot();

    section_top("LARGEST PHONETIC BUCKETS");
    for (code, size) in matcher.phonetic().largest_buckets(top) {
        row(&format!(" {} {}", pad_left(&size.to_string(), 8), themed(Role::Code, &[], code)));
    }
    section_bot();
    Ok(())
}

#[derive(Serialize)]
struct EncodedWord<'a> {
    word: &'a str,
    #[serde(flatten)]
    code: PhoneticCode,
}

fn run_encode(words: &[String], json: bool) -> Result<()> {
    let encoded: Vec<EncodedWord<'_>> = words
        .iter()
        .map(|word| EncodedWord {
            word,
            code: double_metaphone(&lexmatch::normalize(word)),
        })
        .collect();

    if json {
        return write_json(&encoded);
    }

    let mut out = std::io::stdout().lock();
    for EncodedWord { word, code } in &encoded {
        writeln!(out, "{}\t{}\t{}", word, code.primary, code.alternate)?;
    }
    Ok(())
}

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("writing JSON")?;
    writeln!(out)?;
    Ok(())
}
