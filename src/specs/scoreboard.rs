// src/specs/scoreboard.rs
//
// The games block pasted above the first rank marker. We only care about
// games that have not kicked off yet: their teams are the ones that can
// still add points to a pick sheet.
//
// Recognised shapes:
//   Final / Q3 / OT / 12:34 header + two team lines (+ scores)  -> finished or live, skipped
//   "Sun 1:00 PM" / "Today 8:20 pm" + two teams within 8 lines -> pre-game
//   "KC-JAC"                                                   -> pre-game
//   two team lines followed by "TIE"                           -> pre-game

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::consts::PREGAME_LOOKAHEAD;
use crate::core::lines::Line;
use crate::core::teams::{ is_team_token, norm_team };

use super::standings::first_rank_index;

static IS_FINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bfinal\b").expect("static regex must compile"));

static IS_LIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(q[1-4]|1st|2nd|3rd|4th|ot)\b|\b\d{1,2}:\d{2}\b").expect("static regex must compile")
});

static IS_KICKOFF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\b(?:Mon|Tue|Tues|Wed|Thu|Thur|Fri|Sat|Sun)|\bToday|\bTonight)\s+\d{1,2}:\d{2}\s*[AP]M\b")
        .expect("static regex must compile")
});

static IS_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2,4})\s*-\s*([A-Za-z]{2,4})$").expect("static regex must compile")
});

fn is_noise(s: &str) -> bool {
    s == "-" || s.eq_ignore_ascii_case("TIE")
}

/// Teams of games that have not started, plus the header lines that revealed them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pregame {
    pub teams: BTreeSet<String>,
    pub headers: Vec<String>,
}

impl Pregame {
    fn add(&mut self, a: &str, b: &str, header: &str) {
        self.teams.insert(norm_team(a));
        self.teams.insert(norm_team(b));
        self.headers.push(s!(header));
    }
}

fn two_teams_after<'a>(lines: &[Line<'a>], start: usize) -> Option<(&'a str, &'a str)> {
    let mut found: Vec<&str> = Vec::with_capacity(2);
    let end = (start + 1 + PREGAME_LOOKAHEAD).min(lines.len());
    for line in lines.get(start + 1..end)? {
        let tok = line.text;
        if is_noise(tok) {
            continue;
        }
        if is_team_token(tok) {
            found.push(tok);
            if found.len() == 2 {
                return Some((found[0], found[1]));
            }
        }
    }
    None
}

fn is_team_line(lines: &[Line<'_>], i: usize) -> bool {
    lines.get(i).is_some_and(|l| is_team_token(l.text) && !is_noise(l.text))
}

/// Scan everything before the first rank marker.
pub fn parse(lines: &[Line<'_>]) -> Pregame {
    let end = first_rank_index(lines).unwrap_or(lines.len());
    let block = &lines[..end];
    let n = block.len();
    let mut out = Pregame::default();
    let mut i = 0;

    while i < n {
        let line = block[i].text;

        // Kickoff times contain "h:mm" too, so they are checked before live clocks.
        if IS_KICKOFF.is_match(line) {
            if let Some((a, b)) = two_teams_after(block, i) {
                logd!("Scoreboard: pre-game {} vs {} ('{}')", a, b, line);
                out.add(a, b, line);
            }
            i += 1;
            continue;
        }

        if IS_FINAL.is_match(line) || IS_LIVE.is_match(line) {
            if is_team_line(block, i + 1) && is_team_line(block, i + 2) {
                i += if i + 4 < n { 5 } else { 3 };
            } else {
                i += 1;
            }
            continue;
        }

        if let Some(caps) = IS_CODE.captures(line) {
            if let (Some(a), Some(b)) = (caps.get(1), caps.get(2)) {
                logd!("Scoreboard: matchup code '{}'", line);
                out.add(a.as_str(), b.as_str(), line);
            }
            i += 1;
            continue;
        }

        if line.eq_ignore_ascii_case("TIE") && i >= 2 && is_team_line(block, i - 2) && is_team_line(block, i - 1) {
            out.add(block[i - 2].text, block[i - 1].text, "TIE");
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clean_lines;

    fn teams(p: &Pregame) -> Vec<&str> {
        p.teams.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn kickoff_header_pairs_next_two_teams() {
        let lines = clean_lines("Sun 1:00 PM\nKC\n-\nJAC\n1st\nAnn");
        let p = parse(&lines);
        assert_eq!(teams(&p), vec!["JAX", "KC"]);
        assert_eq!(p.headers, vec!["Sun 1:00 PM"]);
    }

    #[test]
    fn finished_and_live_games_are_skipped() {
        let lines = clean_lines("Final\nDAL\nNYG\n24\n17\nQ3 4:12\nBUF\nMIA\n10\n7\n1st\nAnn");
        assert!(parse(&lines).teams.is_empty());
    }

    #[test]
    fn codes_and_ties() {
        let lines = clean_lines("WSH-PHI\nSEA\nSF\nTIE\n1st\nAnn");
        let p = parse(&lines);
        assert_eq!(teams(&p), vec!["PHI", "SEA", "SF", "WAS"]);
    }

    #[test]
    fn nothing_after_first_rank_counts() {
        let lines = clean_lines("1st\nAnn\nKC-JAC");
        assert!(parse(&lines).teams.is_empty());
    }
}
