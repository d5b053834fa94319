// src/core/mod.rs

pub mod lines;
pub mod sanitize;
pub mod teams;

pub use lines::clean_lines;
