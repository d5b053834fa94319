// src/analyze.rs
//
// Turns pasted standings text into per-player rows.
//
// Everything the analysis needs comes in through `analyze(text, opts)`;
// nothing is read from GUI state or globals, so the GUI, the CLI and the
// tests all run the same request-scoped computation.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::{
    config::{
        consts::CLI_MAX_CONFIDENCE_LIMIT,
        options::{ AnalyzeOptions, Layout, SortOrder },
    },
    core::{ clean_lines, lines::Line, sanitize::normalize_dashes },
    error::AnalyzeError,
    focus::{ self, FocusOutcome },
    specs::{ inline, scoreboard, standings, scoreboard::Pregame, Entry, SkippedLine, SlotKind, Token },
};

/// Number of games (= highest confidence value) in the week.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WeekConfig {
    max_confidence: u32,
}

impl WeekConfig {
    /// `1..=CLI_MAX_CONFIDENCE_LIMIT`; no pool has more games than that.
    pub fn new(max_confidence: u32) -> Result<Self, AnalyzeError> {
        if max_confidence == 0 {
            return Err(AnalyzeError::InvalidMaxConfidence(max_confidence));
        }
        if max_confidence > CLI_MAX_CONFIDENCE_LIMIT {
            return Err(AnalyzeError::MaxConfidenceTooLarge { max: max_confidence, limit: CLI_MAX_CONFIDENCE_LIMIT });
        }
        Ok(Self { max_confidence })
    }

    pub fn max_confidence(&self) -> u32 {
        self.max_confidence
    }

    /// 1 + 2 + … + max
    pub fn total_points_possible(&self) -> u32 {
        self.max_confidence * (self.max_confidence + 1) / 2
    }

    pub fn slots(&self) -> RangeInclusive<u32> {
        1..=self.max_confidence
    }

    pub fn contains(&self, value: u32) -> bool {
        self.slots().contains(&value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxSource {
    Auto,
    Override,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerRow {
    pub name: String,
    pub rank: Option<u32>,
    pub current_points: f64,
    pub picks: Vec<Token>,
    /// Confidence values already spent (bare `N`, `TEAM (N)`)
    pub used_slots: BTreeSet<u32>,
    /// Values marked `- (N)` and not also used
    pub unused_slots: BTreeSet<u32>,
    /// Values in 1..=max never mentioned on the row
    pub unmarked_slots: BTreeSet<u32>,
    pub remaining_points: u32,
    pub total_points_possible: u32,
    /// current_points + remaining_points
    pub ceiling: f64,
}

impl PlayerRow {
    pub fn from_entry(entry: Entry, week: WeekConfig, count_unmarked: bool, warnings: &mut Vec<String>) -> Self {
        let Entry { name, rank, current_points, picks, .. } = entry;
        let max = week.max_confidence();

        let mut used_slots = BTreeSet::new();
        let mut unused_slots = BTreeSet::new();
        for tok in &picks {
            if !week.contains(tok.value) {
                warnings.push(format!("{}: confidence {} is outside 1..={}; ignored", name, tok.value, max));
                continue;
            }
            match tok.kind {
                SlotKind::Used => {
                    if !used_slots.insert(tok.value) {
                        warnings.push(format!("{}: confidence {} is used more than once", name, tok.value));
                    }
                }
                SlotKind::Unused => {
                    unused_slots.insert(tok.value);
                }
            }
        }

        for v in unused_slots.intersection(&used_slots) {
            warnings.push(format!("{}: confidence {} is both used and open; counted as used", name, v));
        }
        unused_slots.retain(|v| !used_slots.contains(v));

        let unmarked_slots: BTreeSet<u32> = week
            .slots()
            .filter(|v| !used_slots.contains(v) && !unused_slots.contains(v))
            .collect();

        let mut remaining_points: u32 = unused_slots.iter().sum();
        if count_unmarked {
            remaining_points += unmarked_slots.iter().sum::<u32>();
        }

        Self {
            name,
            rank,
            current_points,
            picks,
            used_slots,
            unused_slots,
            unmarked_slots,
            remaining_points,
            total_points_possible: week.total_points_possible(),
            ceiling: current_points + f64::from(remaining_points),
        }
    }

    pub fn used_points(&self) -> u32 {
        self.used_slots.iter().sum()
    }

    /// Count of open confidence slots ("-" markers) on the row.
    pub fn open_slot_count(&self) -> usize {
        self.unused_slots.len()
    }

    pub fn set_remaining(&mut self, remaining: u32) {
        self.remaining_points = remaining;
        self.ceiling = self.current_points + f64::from(remaining);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    /// Layout actually used (never `Auto`)
    pub layout: Layout,
    pub week: WeekConfig,
    pub max_source: MaxSource,
    pub rows: Vec<PlayerRow>,
    pub skipped: Vec<SkippedLine>,
    pub warnings: Vec<String>,
    pub pregame: Pregame,
    pub focus: Option<FocusOutcome>,
}

impl Analysis {
    pub fn total_points_possible(&self) -> u32 {
        self.week.total_points_possible()
    }

    pub fn row(&self, name: &str) -> Option<&PlayerRow> {
        self.rows.iter().find(|r| r.name == name)
    }
}

/// `Auto` becomes `Standings` when any line is a rank marker.
pub fn resolve_layout(layout: Layout, lines: &[Line<'_>]) -> Layout {
    match layout {
        Layout::Auto if standings::first_rank_index(lines).is_some() => Layout::Standings,
        Layout::Auto => Layout::Inline,
        other => other,
    }
}

fn resolve_week(entries: &[Entry], max_override: Option<u32>) -> Result<(WeekConfig, MaxSource), AnalyzeError> {
    if let Some(max) = max_override {
        return Ok((WeekConfig::new(max)?, MaxSource::Override));
    }
    let seen = entries
        .iter()
        .flat_map(|e| e.picks.iter().map(|t| t.value))
        // larger values are reported as out of range by `from_entry`
        .filter(|v| *v <= CLI_MAX_CONFIDENCE_LIMIT)
        .max()
        .unwrap_or(0);
    if seen == 0 {
        return Err(AnalyzeError::NoConfidenceValues);
    }
    Ok((WeekConfig::new(seen)?, MaxSource::Auto))
}

fn sort_rows(rows: &mut [PlayerRow], order: SortOrder) {
    match order {
        SortOrder::Input => {}
        // Stable: equal ceilings keep paste order.
        SortOrder::Ceiling => rows.sort_by(|a, b| {
            b.ceiling
                .total_cmp(&a.ceiling)
                .then(b.current_points.total_cmp(&a.current_points))
        }),
    }
}

pub fn analyze(text: &str, opts: &AnalyzeOptions) -> Result<Analysis, AnalyzeError> {
    if text.trim().is_empty() {
        return Err(AnalyzeError::EmptyInput);
    }

    let normalized = normalize_dashes(text);
    let lines = clean_lines(&normalized);
    let layout = resolve_layout(opts.layout, &lines);

    let (parsed, pregame) = match layout {
        Layout::Standings => (standings::parse(&lines), scoreboard::parse(&lines)),
        _ => (inline::parse(&lines), Pregame::default()),
    };
    logd!(
        "Analyze: layout={:?} lines={} entries={} skipped={}",
        layout,
        lines.len(),
        parsed.entries.len(),
        parsed.skipped.len()
    );

    if parsed.entries.is_empty() {
        return Err(AnalyzeError::NoRows { skipped: parsed.skipped.len() });
    }

    let (week, max_source) = resolve_week(&parsed.entries, opts.max_confidence)?;

    let mut warnings = parsed.warnings;
    let mut rows: Vec<PlayerRow> = parsed
        .entries
        .into_iter()
        .map(|e| PlayerRow::from_entry(e, week, opts.count_unmarked, &mut warnings))
        .collect();

    let focus = match &opts.focus {
        Some(f) => Some(focus::apply(&mut rows, f, &pregame)?),
        None => None,
    };

    sort_rows(&mut rows, opts.sort);

    logf!(
        "Analyze: {} row(s), max={} ({:?}), total={}, skipped={}, warnings={}",
        rows.len(),
        week.max_confidence(),
        max_source,
        week.total_points_possible(),
        parsed.skipped.len(),
        warnings.len()
    );

    Ok(Analysis {
        layout,
        week,
        max_source,
        rows,
        skipped: parsed.skipped,
        warnings,
        pregame,
        focus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(max: Option<u32>) -> AnalyzeOptions {
        AnalyzeOptions { max_confidence: max, ..AnalyzeOptions::default() }
    }

    #[test]
    fn sixteen_game_week_totals_136() {
        assert_eq!(WeekConfig::new(16).unwrap().total_points_possible(), 136);
        assert_eq!(WeekConfig::new(0), Err(AnalyzeError::InvalidMaxConfidence(0)));
    }

    #[test]
    fn oversized_week_is_rejected() {
        assert_eq!(WeekConfig::new(99).unwrap().total_points_possible(), 4950);
        assert_eq!(
            WeekConfig::new(70_000),
            Err(AnalyzeError::MaxConfidenceTooLarge { max: 70_000, limit: 99 })
        );
        assert_eq!(
            analyze("Alice 1 - (2)", &opts(Some(100_000))),
            Err(AnalyzeError::MaxConfidenceTooLarge { max: 100_000, limit: 99 })
        );
    }

    #[test]
    fn alice_example() {
        let a = analyze("Alice 1 2 - (3) - (4)", &opts(Some(4))).unwrap();
        let alice = &a.rows[0];
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.remaining_points, 7);
        assert_eq!(alice.total_points_possible, 10);
        assert_eq!(alice.open_slot_count(), 2);
        assert!(alice.used_points() + alice.remaining_points <= alice.total_points_possible);
    }

    #[test]
    fn no_unused_tokens_means_nothing_remaining() {
        let a = analyze("Bob 1 2 3 4", &opts(Some(4))).unwrap();
        assert_eq!(a.rows[0].remaining_points, 0);
    }

    #[test]
    fn all_unused_means_everything_remaining() {
        let a = analyze("Cat - (1) - (2) - (3) - (4)", &opts(Some(4))).unwrap();
        assert_eq!(a.rows[0].remaining_points, a.total_points_possible());
    }

    #[test]
    fn unmarked_values_count_only_when_asked() {
        let a = analyze("Dan 1 2", &opts(Some(4))).unwrap();
        assert_eq!(a.rows[0].remaining_points, 0);
        assert_eq!(a.rows[0].unmarked_slots, BTreeSet::from([3, 4]));

        let mut o = opts(Some(4));
        o.count_unmarked = true;
        let a = analyze("Dan 1 2", &o).unwrap();
        assert_eq!(a.rows[0].remaining_points, 7);
    }

    #[test]
    fn out_of_range_and_conflicts_warn() {
        let a = analyze("Eve 1 - (1) - (2) 9", &opts(Some(2))).unwrap();
        let eve = &a.rows[0];
        assert_eq!(eve.used_slots, BTreeSet::from([1]));
        assert_eq!(eve.unused_slots, BTreeSet::from([2]));
        assert_eq!(eve.remaining_points, 2);
        assert_eq!(a.warnings.len(), 2);
    }

    #[test]
    fn auto_max_from_largest_value() {
        let a = analyze("Ann 1 - (5)\nBen 2 3", &opts(None)).unwrap();
        assert_eq!(a.week.max_confidence(), 5);
        assert_eq!(a.max_source, MaxSource::Auto);

        let a = analyze("Ann 1 - (5) 250", &opts(None)).unwrap();
        assert_eq!(a.week.max_confidence(), 5);
        assert_eq!(a.warnings.len(), 1);
    }

    #[test]
    fn unreadable_numbers_reach_the_warnings() {
        let a = analyze("Ann 1000 - (3)", &opts(Some(3))).unwrap();
        assert_eq!(a.rows[0].remaining_points, 3);
        assert_eq!(a.warnings, vec!["line 1: '1000' is not a confidence value; ignored"]);
    }

    #[test]
    fn empty_and_rowless_input() {
        assert_eq!(analyze("  \n ", &opts(None)), Err(AnalyzeError::EmptyInput));
        assert_eq!(analyze("just words", &opts(None)), Err(AnalyzeError::NoRows { skipped: 1 }));
    }

    #[test]
    fn ceiling_sort_is_stable() {
        let text = "1st\nA\n10\n- (1)\n2nd\nB\n12\nLAR (3)\n3rd\nC\n11\n- (1)";
        let mut o = opts(Some(3));
        o.sort = SortOrder::Ceiling;
        let a = analyze(text, &o).unwrap();
        let names: Vec<&str> = a.rows.iter().map(|r| r.name.as_str()).collect();
        // ceilings: A = 11, B = 12, C = 12 (current 11 + 1)
        assert_eq!(names, vec!["B", "C", "A"]);
    }
}
