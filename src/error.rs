// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Reasons an Analyze request cannot produce a table.
/// Individual malformed lines are not errors; they end up in `Analysis::skipped`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("No data: paste the standings text first.")]
    EmptyInput,

    #[error("No players found in the pasted text ({skipped} line(s) skipped).")]
    NoRows { skipped: usize },

    #[error("Max confidence must be at least 1 (got {0}).")]
    InvalidMaxConfidence(u32),

    #[error("Max confidence {max} is more than {limit} games.")]
    MaxConfidenceTooLarge { max: u32, limit: u32 },

    #[error("No confidence values found; set the max confidence manually.")]
    NoConfidenceValues,

    #[error("Focus entry '{0}' is not in the standings.")]
    UnknownFocusEntry(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Nothing to export")]
    Empty,

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
