// src/specs/inline.rs
//
// One player per line: `<name> <token> <token> …`
//
//   Alice 1 2 - (3) - (4)
//   Bob   - (1) 2 3 4

use crate::core::lines::Line;

use super::{ tokens, Entry, Parsed, SkipReason, SkippedLine };

pub fn parse(lines: &[Line<'_>]) -> Parsed {
    let mut out = Parsed::default();

    for line in lines {
        let tokens::SplitLine { name, tokens: picks, rejected } = tokens::split_line(line.text);

        for v in rejected {
            out.warnings.push(format!("line {}: '{}' is not a confidence value; ignored", line.no, v));
        }

        if picks.is_empty() {
            logd!("Inline: line {} has no tokens: '{}'", line.no, line.text);
            out.skipped.push(SkippedLine::new(line, SkipReason::NoTokens));
            continue;
        }
        if name.is_empty() {
            logd!("Inline: line {} has no name: '{}'", line.no, line.text);
            out.skipped.push(SkippedLine::new(line, SkipReason::NoName));
            continue;
        }

        out.entries.push(Entry {
            line_no: line.no,
            rank: None,
            name: crate::core::sanitize::normalize_ws(name),
            current_points: 0.0,
            picks,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clean_lines;
    use crate::specs::Token;

    #[test]
    fn rows_in_input_order_with_skips() {
        let lines = clean_lines("Alice 1 2 - (3) - (4)\nnothing here\n- (1) 2\nBob - (1) 2 3 4");
        let parsed = parse(&lines);

        let names: Vec<&str> = parsed.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(parsed.entries[1].picks[0], Token::unused(1));
        assert_eq!(parsed.entries[1].line_no, 4);

        assert_eq!(parsed.skipped.len(), 2);
        assert_eq!(parsed.skipped[0].reason, SkipReason::NoTokens);
        assert_eq!(parsed.skipped[0].line_no, 2);
        assert_eq!(parsed.skipped[1].reason, SkipReason::NoName);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn odd_numbers_warn_instead_of_vanishing() {
        let lines = clean_lines("Ann 1000 - (3)
Bo 12.5 1");
        let parsed = parse(&lines);

        assert_eq!(parsed.entries[0].picks, vec![Token::unused(3)]);
        assert_eq!(parsed.entries[1].picks, vec![Token::used(1)]);
        assert_eq!(
            parsed.warnings,
            vec![
                "line 1: '1000' is not a confidence value; ignored",
                "line 2: '12.5' is not a confidence value; ignored",
            ]
        );
    }
}
