// src/focus.rs
//
// "My entry" mode. For one chosen participant the remaining points are
// taken from the picks on games that have not started yet, instead of the
// open "- (N)" slots. When no remaining game matches any pick, fall back
// to the pick-count difference against everybody else: picks beyond the
// usual count are the ones still hidden from the field.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    analyze::PlayerRow,
    config::options::FocusOptions,
    core::teams::norm_team,
    error::AnalyzeError,
    specs::scoreboard::Pregame,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMethod {
    RemainingTeams,
    CountDifference,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FocusOutcome {
    pub name: String,
    pub method: FocusMethod,
    /// Teams the remaining-games method looked for
    pub teams: BTreeSet<String>,
    pub own_picks: usize,
    /// Most common pick count among the other entries
    pub base_picks: usize,
    pub remaining_points: u32,
}

/// Sum of confidence on picks whose team is still to play.
pub fn remaining_from_teams(row: &PlayerRow, teams: &BTreeSet<String>) -> u32 {
    row.picks
        .iter()
        .filter(|p| !p.is_unused())
        .filter(|p| p.team.as_deref().is_some_and(|t| teams.contains(t)))
        .map(|p| p.value)
        .sum()
}

/// Most frequent value; ties go to the one seen first. `0` for no input.
pub fn base_pick_count<I: IntoIterator<Item = usize>>(counts: I) -> usize {
    let mut tally: Vec<(usize, usize)> = Vec::new();
    for c in counts {
        match tally.iter_mut().find(|(v, _)| *v == c) {
            Some((_, n)) => *n += 1,
            None => tally.push((c, 1)),
        }
    }
    let mut best: Option<(usize, usize)> = None;
    for (v, n) in tally {
        if best.is_none_or(|(_, bn)| n > bn) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| v).unwrap_or(0)
}

/// Confidence on the trailing picks beyond `base` (dash slots excluded).
pub fn remaining_from_count_diff(row: &PlayerRow, base: usize) -> u32 {
    let extra = row.picks.len().saturating_sub(base);
    if extra == 0 {
        return 0;
    }
    row.picks[row.picks.len() - extra..]
        .iter()
        .filter(|p| !p.is_unused())
        .map(|p| p.value)
        .sum()
}

fn find_row(rows: &[PlayerRow], name: &str) -> Option<usize> {
    let wanted = name.trim();
    rows.iter()
        .position(|r| r.name == wanted)
        .or_else(|| rows.iter().position(|r| r.name.eq_ignore_ascii_case(wanted)))
}

/// Replace the focus entry's remaining points (and ceiling) in place.
pub fn apply(rows: &mut [PlayerRow], focus: &FocusOptions, pregame: &Pregame) -> Result<FocusOutcome, AnalyzeError> {
    let ix = find_row(rows, &focus.name).ok_or_else(|| AnalyzeError::UnknownFocusEntry(s!(focus.name.trim())))?;

    let teams: BTreeSet<String> = if focus.remaining_teams.is_empty() {
        pregame.teams.clone()
    } else {
        focus.remaining_teams.iter().map(|t| norm_team(t)).collect()
    };

    let base = base_pick_count(
        rows.iter()
            .enumerate()
            .filter(|(i, r)| *i != ix && !r.picks.is_empty())
            .map(|(_, r)| r.picks.len()),
    );

    let row = &mut rows[ix];
    let mut method = FocusMethod::RemainingTeams;
    let mut remaining = remaining_from_teams(row, &teams);
    if remaining == 0 {
        method = FocusMethod::CountDifference;
        remaining = remaining_from_count_diff(row, base);
    }
    row.set_remaining(remaining);

    logf!(
        "Focus: {} via {:?}: remaining={} (picks {} vs base {}, teams {:?})",
        row.name, method, remaining, row.picks.len(), base, teams
    );

    Ok(FocusOutcome {
        name: row.name.clone(),
        method,
        teams,
        own_picks: row.picks.len(),
        base_picks: base,
        remaining_points: remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_mode_with_first_seen_tiebreak() {
        assert_eq!(base_pick_count([3, 4, 4, 3, 5]), 3);
        assert_eq!(base_pick_count([5, 4, 4]), 4);
        assert_eq!(base_pick_count(Vec::<usize>::new()), 0);
    }
}
