// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the lexmatch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `LEXMATCH_THEME` first, then `COLORFGBG`, then macOS system appearance,
//! then defaults to dark. Respects `NO_COLOR` and plain output when stdout
//! is not a TTY.

use std::sync::OnceLock;

/// Width between │ and │ (excluding border chars).
pub const BOX_WIDTH: usize = 72;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn theme() -> Theme {
    *THEME.get_or_init(|| {
        explicit_theme()
            .or_else(colorfgbg_theme)
            .or_else(system_theme)
            .unwrap_or(Theme::Dark)
    })
}

fn explicit_theme() -> Option<Theme> {
    let value = std::env::var("LEXMATCH_THEME").ok()?;
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; backgrounds 7 and up, except 8, are light.
fn colorfgbg_theme() -> Option<Theme> {
    let value = std::env::var("COLORFGBG").ok()?;
    let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
    (bg >= 7 && bg != 8).then_some(Theme::Light)
}

#[cfg(target_os = "macos")]
fn system_theme() -> Option<Theme> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    let dark = String::from_utf8_lossy(&output.stdout).contains("Dark");
    (output.status.success() && !dark).then_some(Theme::Light)
}

#[cfg(not(target_os = "macos"))]
fn system_theme() -> Option<Theme> {
    None
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

/// What a span of output means. Themes decide the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Matched words
    Word,
    /// Phonetic codes, exact markers
    Code,
    Heading,
    /// Borders, counts, excerpts
    Muted,
    Strong,
    Good,
    Fair,
    /// Edit-distance signals
    Edit,
    /// N-gram signals
    Gram,
}

type Rgb = (u8, u8, u8);

struct Palette {
    green: Rgb,
    yellow: Rgb,
    blue: Rgb,
    magenta: Rgb,
    cyan: Rgb,
    gray: Rgb,
    bright_green: Rgb,
}

const ONE_DARK: Palette = Palette {
    green: (152, 195, 121),
    yellow: (229, 192, 123),
    blue: (97, 175, 239),
    magenta: (198, 120, 221),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
    bright_green: (166, 226, 46),
};

const ONE_LIGHT: Palette = Palette {
    green: (80, 161, 79),
    yellow: (193, 132, 1),
    blue: (64, 120, 242),
    magenta: (166, 38, 164),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
    bright_green: (68, 140, 39),
};

impl Palette {
    fn current() -> &'static Palette {
        match theme() {
            Theme::Dark => &ONE_DARK,
            Theme::Light => &ONE_LIGHT,
        }
    }

    fn rgb(&self, role: Role) -> Rgb {
        match role {
            Role::Word | Role::Edit => self.blue,
            Role::Code => self.magenta,
            Role::Heading | Role::Gram => self.cyan,
            Role::Muted => self.gray,
            Role::Strong => self.bright_green,
            Role::Good => self.green,
            Role::Fair => self.yellow,
        }
    }
}

fn escape((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Paint `text` in the current theme's color for `role`.
pub fn themed(role: Role, modifiers: &[&str], text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    format!(
        "{}{}{}{}",
        modifiers.concat(),
        escape(Palette::current().rgb(role)),
        text,
        RESET
    )
}

/// Visible length, ANSI escapes excluded.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        escape(Palette::current().rgb(Role::Muted))
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let b = border();
    println!("{b}│{}{content}{}{b}│{}", reset(), " ".repeat(pad), reset());
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(Role::Heading, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let b = border();
    println!("{b}┌{}{label_part}{b}{}┐{}", reset(), "─".repeat(remaining), reset());
}

/// └──────────────────┘
pub fn section_bot() {
    let b = border();
    println!("{b}└{}┘{}", "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Final score, colored by band.
pub fn score_value(score: f64) -> String {
    let role = if score >= 95.0 {
        Role::Strong
    } else if score >= 80.0 {
        Role::Good
    } else if score >= 60.0 {
        Role::Fair
    } else {
        Role::Muted
    };
    themed(role, &[], &format!("{:>7.2}", score))
}

/// `[EXACT]` marker for bypass results.
pub fn exact_badge(exact: bool) -> String {
    if !exact {
        return " ".repeat(7);
    }
    themed(Role::Code, &[BOLD], "[EXACT]")
}

/// Signal name, colored by family.
pub fn signal_badge(label: &str) -> String {
    let role = match label.split('(').next().unwrap_or(label) {
        "exact" | "prefix" | "substring" | "suffix" => Role::Good,
        "transposition" | "levenshtein" => Role::Edit,
        "phonetic" => Role::Code,
        "ngram" => Role::Gram,
        _ => Role::Fair,
    };
    themed(role, &[], label)
}

/// "1, 4, 9" capped at `max` entries with a "+N" tail.
pub fn line_list(lines: &[usize], max: usize) -> String {
    let shown: Vec<String> = lines.iter().take(max).map(usize::to_string).collect();
    let mut text = shown.join(", ");
    if lines.len() > max {
        text.push_str(&format!(" +{}", lines.len() - max));
    }
    text
}
