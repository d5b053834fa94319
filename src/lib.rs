// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod analyze;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod focus;
pub mod gui;
pub mod specs;
pub mod table;

pub use analyze::{analyze, Analysis, PlayerRow, WeekConfig};
pub use error::AnalyzeError;
