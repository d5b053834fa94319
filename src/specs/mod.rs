// src/specs/mod.rs
//! # Paste layout "specs"
//!
//! Each submodule knows how to read one shape of pasted standings text and
//! turn it into [`Entry`] values. They only extract; arithmetic (remaining
//! points, ceilings, ordering) lives in `crate::analyze`.
//!
//! - `tokens`     – the `N` / `- (N)` / `TEAM (N)` grammar shared by all layouts.
//! - `inline`     – one player per line: `Alice 1 2 - (3) - (4)`.
//! - `standings`  – the CBS Weekly Standings block (rank, name, points, picks).
//! - `scoreboard` – the games block above the standings; finds games not yet started.
//!
//! Input lines are already cleaned (`core::clean_lines`): trimmed, non-empty,
//! dash variants unified.

use serde::Serialize;

use crate::core::lines::Line;

pub mod inline;
pub mod scoreboard;
pub mod standings;
pub mod tokens;

pub use tokens::{ SlotKind, Token };

/// One participant as read from the paste, before any arithmetic.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// Line the entry starts on (1-based, raw paste numbering)
    pub line_no: usize,
    pub rank: Option<u32>,
    pub name: String,
    pub current_points: f64,
    pub picks: Vec<Token>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    NoName,
    NoTokens,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::NoName => "no player name",
            SkipReason::NoTokens => "no confidence values",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub line_no: usize,
    pub text: String,
    pub reason: SkipReason,
}

impl SkippedLine {
    pub fn new(line: &Line<'_>, reason: SkipReason) -> Self {
        Self { line_no: line.no, text: s!(line.text), reason }
    }
}

/// Result of reading a paste with one layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parsed {
    pub entries: Vec<Entry>,
    pub skipped: Vec<SkippedLine>,
    /// Values seen but not usable as confidence numbers
    pub warnings: Vec<String>,
}
