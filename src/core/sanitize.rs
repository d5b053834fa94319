// src/core/sanitize.rs

/// Collapse whitespace runs (tabs, NBSP, …) into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Unify the dash variants pasted from web pages (en/em dash, minus sign) to '-'.
pub fn normalize_dashes(s: &str) -> String {
    s.chars()
        .map(|ch| match ch {
            '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
            _ => ch,
        })
        .collect()
}

/// Keep digits and '.' only, e.g. "72 pts" -> "72". Used for loose points lines.
pub fn digits_and_dots(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Render a float without a trailing ".0" when it is integral.
pub fn fmt_points(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
