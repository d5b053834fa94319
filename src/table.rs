// src/table.rs
//! TableData: an `Analysis` flattened to headers + string rows.
//!
//! The GUI table, clipboard copy and delimited exports all render from this
//! one shape, so what you see is what you copy.

use crate::analyze::{ Analysis, PlayerRow };
use crate::config::consts::{ HEADERS, NAME_COL };
use crate::core::sanitize::fmt_points;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn empty() -> Self {
        Self { headers: None, rows: Vec::new() }
    }

    pub fn with(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn default_headers() -> Vec<String> {
        HEADERS.iter().map(|h| s!(*h)).collect()
    }

    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            headers: Some(Self::default_headers()),
            rows: analysis.rows.iter().map(row_cells).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Everything but the name column is right-aligned numbers.
    pub fn is_numeric_col(&self, col: usize) -> bool {
        col != NAME_COL
    }
}

fn row_cells(r: &PlayerRow) -> Vec<String> {
    vec![
        r.name.clone(),
        r.rank.map(|v| v.to_string()).unwrap_or_default(),
        fmt_points(r.current_points),
        r.open_slot_count().to_string(),
        r.remaining_points.to_string(),
        r.total_points_possible.to_string(),
        fmt_points(r.ceiling),
    ]
}
