// src/specs/standings.rs
//
// CBS Weekly Standings paste. After the scoreboard block, each participant is:
//
//   1st              rank marker
//   Big Tuna         name
//   72    441        points line (first number = current week points), optional
//   LAR (14)         inline pick
//   - (10)           unused slot
//   KC               two-line pick: team …
//   (9)              … then confidence
//
// A participant ends at the next rank marker or EOF. Lines that are neither
// picks nor rank markers ("TIE", "KC-JAC", stray dashes) are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::lines::Line;
use crate::core::sanitize::{ digits_and_dots, normalize_ws };
use crate::core::teams::is_team_token;

use super::tokens::{ parse_conf_line, parse_pick_line, Token };
use super::{ Entry, Parsed, SkipReason, SkippedLine };

static RANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})(st|nd|rd|th)$").expect("static regex must compile"));

static TWO_INTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(\d+)$").expect("static regex must compile"));

/// `Some(3)` for "3rd".
pub fn rank_of(line: &str) -> Option<u32> {
    RANK_RE.captures(line)?.get(1)?.as_str().parse().ok()
}

pub fn first_rank_index(lines: &[Line<'_>]) -> Option<usize> {
    lines.iter().position(|l| rank_of(l.text).is_some())
}

/// A pick starts at `i`, either inline or in the two-line form.
fn pick_at(lines: &[Line<'_>], i: usize) -> Option<(Token, usize)> {
    let t = lines.get(i)?.text;
    if let Some(tok) = parse_pick_line(t) {
        return Some((tok, 1));
    }
    if is_team_token(t) || t == "-" {
        let v = parse_conf_line(lines.get(i + 1)?.text)?;
        return Some((Token::pick(t, v), 2));
    }
    None
}

fn points_of(line: &str) -> Option<f64> {
    if let Some(caps) = TWO_INTS_RE.captures(line) {
        return caps.get(1)?.as_str().parse().ok();
    }
    let digits = digits_and_dots(line);
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(0.0))
}

pub fn parse(lines: &[Line<'_>]) -> Parsed {
    let mut out = Parsed::default();
    let n = lines.len();
    let mut i = first_rank_index(lines).unwrap_or(n);

    while i < n {
        let Some(rank) = rank_of(lines[i].text) else {
            i += 1;
            continue;
        };
        let rank_line = &lines[i];
        i += 1;
        if i >= n {
            logd!("Standings: rank marker '{}' at EOF", rank_line.text);
            break;
        }

        if rank_of(lines[i].text).is_some() || pick_at(lines, i).is_some() {
            out.skipped.push(SkippedLine::new(rank_line, SkipReason::NoName));
            continue;
        }
        let name = normalize_ws(lines[i].text);
        i += 1;

        let mut current_points = 0.0;
        if i < n && rank_of(lines[i].text).is_none() && pick_at(lines, i).is_none() {
            if let Some(p) = points_of(lines[i].text) {
                current_points = p;
                i += 1;
            }
        }

        let mut picks = Vec::new();
        while i < n && rank_of(lines[i].text).is_none() {
            if let Some((tok, used)) = pick_at(lines, i) {
                picks.push(tok);
                i += used;
                continue;
            }
            logd!("Standings: ignoring '{}' (line {})", lines[i].text, lines[i].no);
            i += 1;
        }

        logd!("Standings: {} rank={} points={} picks={}", name, rank, current_points, picks.len());
        out.entries.push(Entry {
            line_no: rank_line.no,
            rank: Some(rank),
            name,
            current_points,
            picks,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clean_lines;

    const PASTE: &str = "\
Week 3 Standings
1st
Big Tuna
72    441
LAR (14)
- (10)
KC
(9)
TIE
2nd
Sam
65
- (14)
DAL (10)
3rd
";

    #[test]
    fn ranks() {
        assert_eq!(rank_of("1st"), Some(1));
        assert_eq!(rank_of("22ND"), Some(22));
        assert_eq!(rank_of("first"), None);
    }

    #[test]
    fn reads_participants() {
        let lines = clean_lines(PASTE);
        let parsed = parse(&lines);
        assert_eq!(parsed.entries.len(), 2);

        let tuna = &parsed.entries[0];
        assert_eq!(tuna.rank, Some(1));
        assert_eq!(tuna.name, "Big Tuna");
        assert_eq!(tuna.current_points, 72.0);
        assert_eq!(
            tuna.picks,
            vec![Token::pick("LAR", 14), Token::unused(10), Token::pick("KC", 9)]
        );

        let sam = &parsed.entries[1];
        assert_eq!(sam.rank, Some(2));
        assert_eq!(sam.current_points, 65.0);
        assert_eq!(sam.picks, vec![Token::unused(14), Token::pick("DAL", 10)]);
    }

    #[test]
    fn missing_points_line_keeps_first_pick() {
        let lines = clean_lines("1st\nAnn\nNYG (3)\n- (2)");
        let parsed = parse(&lines);
        assert_eq!(parsed.entries[0].current_points, 0.0);
        assert_eq!(parsed.entries[0].picks.len(), 2);
    }

    #[test]
    fn rank_without_name_is_skipped() {
        let lines = clean_lines("1st\n2nd\nAnn\n10\n- (1)");
        let parsed = parse(&lines);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].reason, SkipReason::NoName);
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].name, "Ann");
    }
}
