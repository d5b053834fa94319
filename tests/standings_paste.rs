// tests/standings_paste.rs
//
// CBS Weekly Standings pastes, scoreboard block included.
//
use pickem_paste::{
    analyze,
    config::options::{ AnalyzeOptions, Layout, SortOrder },
    specs::Token,
};

const PASTE: &str = "\
NFL Week 3
Final
DAL
NYG
24
17
Sun 1:00 PM
KC
-
JAC
Weekly Standings
1st
Big Tuna
72    441
LAR (14)
- (10)
KC
(9)
2nd
Sam
65    430
- (14)
DAL (10)
- (9)
3rd
Lee
80
NYG (14)
JAC (10)
- (9)
";

#[test]
fn auto_picks_standings_when_ranks_present() {
    let a = analyze(PASTE, &AnalyzeOptions::default()).unwrap();
    assert_eq!(a.layout, Layout::Standings);
    assert_eq!(a.rows.len(), 3);
}

#[test]
fn current_points_and_picks() {
    let a = analyze(PASTE, &AnalyzeOptions::default()).unwrap();
    assert_eq!(a.week.max_confidence(), 14);

    let tuna = a.row("Big Tuna").unwrap();
    assert_eq!(tuna.rank, Some(1));
    assert_eq!(tuna.current_points, 72.0);
    assert_eq!(tuna.picks[2], Token::pick("KC", 9));
    assert_eq!(tuna.remaining_points, 10);
    assert_eq!(tuna.ceiling, 82.0);

    let sam = a.row("Sam").unwrap();
    assert_eq!(sam.current_points, 65.0);
    assert_eq!(sam.remaining_points, 23);
    assert_eq!(sam.ceiling, 88.0);

    let lee = a.row("Lee").unwrap();
    assert_eq!(lee.current_points, 80.0);
    assert_eq!(lee.picks[1].team.as_deref(), Some("JAX"));
}

#[test]
fn pregame_teams_found_above_standings() {
    let a = analyze(PASTE, &AnalyzeOptions::default()).unwrap();
    let teams: Vec<&str> = a.pregame.teams.iter().map(|t| t.as_str()).collect();
    assert_eq!(teams, vec!["JAX", "KC"]);
}

#[test]
fn ceiling_sort() {
    let opts = AnalyzeOptions { sort: SortOrder::Ceiling, ..AnalyzeOptions::default() };
    let a = analyze(PASTE, &opts).unwrap();
    let names: Vec<&str> = a.rows.iter().map(|r| r.name.as_str()).collect();
    // Lee 89, Sam 88, Big Tuna 82
    assert_eq!(names, vec!["Lee", "Sam", "Big Tuna"]);
}

#[test]
fn forced_inline_ignores_rank_markers() {
    let opts = AnalyzeOptions { layout: Layout::Inline, ..AnalyzeOptions::default() };
    let a = analyze("1st\nAlice 1 - (2)", &opts).unwrap();
    assert_eq!(a.layout, Layout::Inline);
    assert_eq!(a.rows.len(), 1);
}
