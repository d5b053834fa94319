// tests/analyze_inline.rs
//
// One-player-per-line pastes through the public `analyze` entry point.
//
use pickem_paste::{
    analyze,
    config::options::{ AnalyzeOptions, Layout },
    specs::tokens::tokenize,
    specs::{ SkipReason, Token },
    AnalyzeError, WeekConfig,
};

fn with_max(max: u32) -> AnalyzeOptions {
    AnalyzeOptions { max_confidence: Some(max), ..AnalyzeOptions::default() }
}

#[test]
fn sixteen_games_total_136() {
    let week = WeekConfig::new(16).unwrap();
    assert_eq!(week.total_points_possible(), 136);

    let a = analyze("Pat - (16) 1 2", &with_max(16)).unwrap();
    assert!(a.rows.iter().all(|r| r.total_points_possible == 136));
}

#[test]
fn alice_has_seven_remaining_of_ten() {
    let a = analyze("Alice 1 2 - (3) - (4)", &with_max(4)).unwrap();
    assert_eq!(a.layout, Layout::Inline);

    let alice = a.row("Alice").unwrap();
    assert_eq!(alice.remaining_points, 7);
    assert_eq!(alice.total_points_possible, 10);
    assert_eq!(alice.open_slot_count(), 2);
}

#[test]
fn used_plus_remaining_never_exceeds_total() {
    let text = "\
Alice 1 2 - (3) - (4)
Bob - (1) 2 3 4
Cat - (1) - (2) - (3) - (4)
Dan 4 3 2 1
";
    let a = analyze(text, &with_max(4)).unwrap();
    for r in &a.rows {
        assert!(r.used_points() + r.remaining_points <= r.total_points_possible, "{}", r.name);
    }

    assert_eq!(a.row("Cat").unwrap().remaining_points, 10);
    assert_eq!(a.row("Dan").unwrap().remaining_points, 0);
}

#[test]
fn rows_keep_paste_order() {
    let a = analyze("Zed 1 - (2)\nAmy - (1) 2\nMo 1 2", &with_max(2)).unwrap();
    let names: Vec<&str> = a.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Amy", "Mo"]);
}

#[test]
fn token_classes() {
    assert_eq!(tokenize("- (3)"), vec![Token::unused(3)]);
    assert_eq!(tokenize("7"), vec![Token::used(7)]);
}

#[test]
fn unicode_dashes_count_as_unused() {
    let a = analyze("Alice 1 2 \u{2013} (3) \u{2014}(4)", &with_max(4)).unwrap();
    assert_eq!(a.rows[0].remaining_points, 7);
}

#[test]
fn malformed_lines_are_skipped_not_fatal() {
    let text = "Alice 1 2 - (3) - (4)\n\nweek three notes\n- (1) 2 3\nBob 1 - (2) 3 4";
    let a = analyze(text, &with_max(4)).unwrap();

    assert_eq!(a.rows.len(), 2);
    assert_eq!(a.skipped.len(), 2);
    assert_eq!(a.skipped[0].line_no, 3);
    assert_eq!(a.skipped[0].reason, SkipReason::NoTokens);
    assert_eq!(a.skipped[1].line_no, 4);
    assert_eq!(a.skipped[1].reason, SkipReason::NoName);
}

#[test]
fn errors() {
    assert_eq!(analyze("", &with_max(4)), Err(AnalyzeError::EmptyInput));
    assert_eq!(analyze("no numbers here", &AnalyzeOptions::default()), Err(AnalyzeError::NoRows { skipped: 1 }));
    assert_eq!(
        analyze("Alice 1 2", &AnalyzeOptions { max_confidence: Some(0), ..AnalyzeOptions::default() }),
        Err(AnalyzeError::InvalidMaxConfidence(0))
    );
    assert_eq!(WeekConfig::new(0), Err(AnalyzeError::InvalidMaxConfidence(0)));
}

#[test]
fn override_beats_auto_detect() {
    let auto = analyze("Alice 1 - (3)", &AnalyzeOptions::default()).unwrap();
    assert_eq!(auto.week.max_confidence(), 3);

    let fixed = analyze("Alice 1 - (3)", &with_max(5)).unwrap();
    assert_eq!(fixed.week.max_confidence(), 5);
    assert_eq!(fixed.total_points_possible(), 15);
}

#[test]
fn count_unmarked_restores_missing_number_sum() {
    let mut opts = with_max(5);
    opts.count_unmarked = true;
    let a = analyze("Alice 1 2 - (3)", &opts).unwrap();
    // 3 is marked open, 4 and 5 never mentioned
    assert_eq!(a.rows[0].remaining_points, 12);
}

#[test]
fn short_last_name_before_parenthesized_value() {
    let a = analyze("Big Al (5) - (3) 1\nAnn (3) 4 - (5)", &with_max(5)).unwrap();
    assert!(a.skipped.is_empty());

    let al = a.row("Big Al").unwrap();
    assert_eq!(al.picks, vec![Token::used(5), Token::unused(3), Token::used(1)]);
    assert_eq!(al.remaining_points, 3);

    let ann = a.row("Ann").unwrap();
    assert_eq!(ann.remaining_points, 5);
}

#[test]
fn four_digit_and_decimal_values_are_warned() {
    let a = analyze("Ann 1000 - (3) 12.5", &with_max(3)).unwrap();
    assert_eq!(a.rows[0].picks, vec![Token::unused(3)]);
    assert_eq!(a.warnings.len(), 2);
}
