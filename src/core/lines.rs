// src/core/lines.rs

/// One non-empty, trimmed line of the paste with its 1-based position in the raw text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub no: usize,
    pub text: &'a str,
}

/// Drop `\r`, trim every line, drop blank lines. Line numbers refer to the raw paste.
pub fn clean_lines(raw: &str) -> Vec<Line<'_>> {
    raw.split('\n')
        .enumerate()
        .map(|(i, ln)| Line { no: i + 1, text: ln.trim() })
        .filter(|ln| !ln.text.is_empty())
        .collect()
}
