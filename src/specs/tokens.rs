// src/specs/tokens.rs
//
// Token grammar shared by both layouts.
//
//   `- (N)`     unused slot N (still worth N points)
//   `TEAM (N)`  pick on TEAM with confidence N (used); on a free-form line
//               only after the first number, before it TEAM is part of the name
//   `(N)`       used slot N, team not shown
//   `N`         used slot N
//
// Dash variants are unified to '-' before text reaches this module.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::teams::norm_team;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
          (?P<dash>-)\s*\(\s*(?P<dv>\d{1,3})\s*\)
        | \b(?P<team>[A-Za-z]{2,4})\s*(?P<paren>\(\s*(?P<tv>\d{1,3})\s*\))
        | \(\s*(?P<pv>\d{1,3})\s*\)
        | \b(?P<bad>\d+\.\d+|\d{4,})\b
        | \b(?P<bv>\d{1,3})\b
        ",
    )
    .expect("static regex must compile")
});

static PICK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2,4}|-)\s*\(\s*(\d{1,2})\s*\)$").expect("static regex must compile")
});

static CONF_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\s*(\d{1,2})\s*\)$").expect("static regex must compile"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Used,
    Unused,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: SlotKind,
    pub value: u32,
    /// Normalised team code for `TEAM (N)` picks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl Token {
    pub fn used(value: u32) -> Self {
        Self { kind: SlotKind::Used, value, team: None }
    }

    pub fn unused(value: u32) -> Self {
        Self { kind: SlotKind::Unused, value, team: None }
    }

    pub fn pick(team: &str, value: u32) -> Self {
        if team == "-" {
            return Self::unused(value);
        }
        Self { kind: SlotKind::Used, value, team: Some(norm_team(team)) }
    }

    pub fn is_unused(&self) -> bool {
        self.kind == SlotKind::Unused
    }

    /// `LAR (14)` / `- (10)` / `14`, as shown in breakdowns.
    pub fn display(&self) -> String {
        match (&self.kind, &self.team) {
            (SlotKind::Unused, _) => format!("- ({})", self.value),
            (SlotKind::Used, Some(team)) => format!("{} ({})", team, self.value),
            (SlotKind::Used, None) => self.value.to_string(),
        }
    }
}

fn num(caps: &regex::Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

/// One free-form line: leading name text, tokens, and numbers that cannot
/// be confidence values (`1000`, `12.5`).
#[derive(Debug, Default, PartialEq)]
pub struct SplitLine<'a> {
    pub name: &'a str,
    pub tokens: Vec<Token>,
    pub rejected: Vec<&'a str>,
}

/// The name ends where the first number starts. A `TEAM (N)` pick is only
/// recognised once the name has ended, so a short last word ("Big Al (5)")
/// stays part of the name.
pub fn split_line(line: &str) -> SplitLine<'_> {
    let mut out = SplitLine::default();
    let mut prefix_end: Option<usize> = None;

    for caps in TOKEN_RE.captures_iter(line) {
        let Some(whole) = caps.get(0) else { continue };

        // The first number closes the name; a team word in front of it belongs to the name.
        let name_team = prefix_end.is_none() && caps.name("team").is_some();
        if prefix_end.is_none() {
            let start = if name_team { caps.name("paren").map_or(whole.start(), |p| p.start()) } else { whole.start() };
            prefix_end = Some(start);
        }

        if let Some(bad) = caps.name("bad") {
            out.rejected.push(bad.as_str());
            continue;
        }

        let token = if let Some(v) = num(&caps, "dv") {
            Token::unused(v)
        } else if let (Some(team), Some(v)) = (caps.name("team"), num(&caps, "tv")) {
            if name_team { Token::used(v) } else { Token::pick(team.as_str(), v) }
        } else if let Some(v) = num(&caps, "pv").or_else(|| num(&caps, "bv")) {
            Token::used(v)
        } else {
            continue;
        };
        out.tokens.push(token);
    }

    out.name = line[..prefix_end.unwrap_or(line.len())].trim();
    out
}

/// Tokens only, ignoring any leading name.
pub fn tokenize(line: &str) -> Vec<Token> {
    split_line(line).tokens
}

/// Whole-line pick: `LAR (14)` or `- (10)`.
pub fn parse_pick_line(line: &str) -> Option<Token> {
    let caps = PICK_LINE_RE.captures(line)?;
    let value = caps.get(2)?.as_str().parse().ok()?;
    Some(Token::pick(caps.get(1)?.as_str(), value))
}

/// Confidence on its own line: `(14)`. Second half of the two-line pick form.
pub fn parse_conf_line(line: &str) -> Option<u32> {
    CONF_ONLY_RE.captures(line)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_paren_is_unused() {
        assert_eq!(tokenize("- (3)"), vec![Token::unused(3)]);
        assert_eq!(tokenize("-(12)"), vec![Token::unused(12)]);
    }

    #[test]
    fn bare_number_is_used() {
        assert_eq!(tokenize("7"), vec![Token::used(7)]);
    }

    #[test]
    fn team_pick_after_the_name_is_used_and_normalised() {
        let t = tokenize("Ann 1 jac (5)");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].kind, SlotKind::Used);
        assert_eq!(t[1].value, 5);
        assert_eq!(t[1].team.as_deref(), Some("JAX"));
    }

    #[test]
    fn short_last_word_stays_in_the_name() {
        let split = split_line("Big Al (5) - (3) 1");
        assert_eq!(split.name, "Big Al");
        assert_eq!(split.tokens, vec![Token::used(5), Token::unused(3), Token::used(1)]);

        let split = split_line("Ann (3) 4");
        assert_eq!(split.name, "Ann");
        assert_eq!(split.tokens, vec![Token::used(3), Token::used(4)]);
    }

    #[test]
    fn long_numbers_and_decimals_are_rejected() {
        let split = split_line("Ann 1000 - (3) 12.5");
        assert_eq!(split.name, "Ann");
        assert_eq!(split.tokens, vec![Token::unused(3)]);
        assert_eq!(split.rejected, vec!["1000", "12.5"]);
    }

    #[test]
    fn name_prefix_is_split_off() {
        let split = split_line("Alice 1 2 - (3) - (4)");
        assert_eq!(split.name, "Alice");
        assert_eq!(
            split.tokens,
            vec![Token::used(1), Token::used(2), Token::unused(3), Token::unused(4)]
        );
    }

    #[test]
    fn long_names_do_not_look_like_teams() {
        let split = split_line("Mary-Kate Olsen (3) 4");
        assert_eq!(split.name, "Mary-Kate Olsen");
        assert_eq!(split.tokens, vec![Token::used(3), Token::used(4)]);
    }

    #[test]
    fn digits_glued_to_words_are_not_tokens() {
        let split = split_line("Bob99 5");
        assert_eq!(split.name, "Bob99");
        assert_eq!(split.tokens, vec![Token::used(5)]);
    }

    #[test]
    fn pick_lines() {
        assert_eq!(parse_pick_line("LAR (14)"), Some(Token::pick("LAR", 14)));
        assert_eq!(parse_pick_line("- (10)"), Some(Token::unused(10)));
        assert_eq!(parse_pick_line("KC-JAC"), None);
        assert_eq!(parse_conf_line("( 9 )"), Some(9));
        assert_eq!(parse_conf_line("9"), None);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Token::pick("LA", 14).display(), "LAR (14)");
        assert_eq!(Token::unused(3).display(), "- (3)");
        assert_eq!(Token::used(7).display(), "7");
    }
}
