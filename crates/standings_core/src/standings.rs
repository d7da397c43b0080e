//! Standings records rebuilt from the filtered match views

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::registry::Registry;
use crate::team::{Ladder, Team};
use crate::types::{GameResult, MatchRecord};

/// Standings keyed by team name
pub type Standings = BTreeMap<String, StandingsRow>;

/// One team's flat standings record for the active view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// Match id of the first match in view
    pub match_id: i64,
    /// Date of the first match in view
    pub game_date: NaiveDateTime,
    pub team: String,
    pub games_played: u32,
    pub games_wins: u32,
    pub games_draws: u32,
    pub games_losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goals_difference: i64,
    pub goals_amount: u32,
    pub goals_ratio: f64,
    pub points: u32,
    pub average_scoring: f64,
    pub average_throughput: f64,
    pub victory_dry: u32,
    pub lossing_dry: u32,
    pub tb_points: u32,
    pub tb05_points: u32,
    pub tb15_points: u32,
    pub tb25_points: u32,
    pub tb35_points: u32,
    pub tb45_points: u32,
    pub tb55_points: u32,
    pub tm_points: u32,
    pub tm05_points: u32,
    pub tm15_points: u32,
    pub tm25_points: u32,
    pub tm35_points: u32,
    pub tm45_points: u32,
    pub tm55_points: u32,
    pub itb_points: u32,
    pub itb05_points: u32,
    pub itb15_points: u32,
    pub itb25_points: u32,
    pub itb35_points: u32,
    pub itb45_points: u32,
    pub itb55_points: u32,
    pub itm_points: u32,
    pub itm05_points: u32,
    pub itm15_points: u32,
    pub itm25_points: u32,
    pub itm35_points: u32,
    pub itm45_points: u32,
    pub itm55_points: u32,
    pub overtime_losses: u32,
    pub overtime_wins: u32,
    pub oz_points: u32,
    pub ozn_points: u32,
    pub dif_rating: f64,
    pub vo_rating: f64,
    pub elo_rating: f64,
    pub potemkin_rating: f64,
    pub power_rating: f64,
}

/// Round to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Standings for every team with at least one filtered match.
///
/// Everything is recomputed from the filtered records; nothing is carried
/// over from the team's running counters except the games-played divisor of
/// the averages and the ratings. Teams are not ranked.
pub fn get_standings(registry: &Registry) -> Standings {
    registry
        .teams()
        .iter()
        .filter_map(|team| build_row(registry, team).map(|row| (team.name().to_string(), row)))
        .collect()
}

fn build_row(registry: &Registry, team: &Team) -> Option<StandingsRow> {
    let records: Vec<&MatchRecord> = team.filtered_matches().collect();
    let first = records.first()?;
    let lines = registry.lines();

    let goals_scored: u32 = records.iter().map(|m| m.goals_for).sum();
    let goals_conceded: u32 = records.iter().map(|m| m.goals_against).sum();
    let count = |pred: &dyn Fn(&MatchRecord) -> bool| -> u32 {
        records.iter().filter(|&&m| pred(m)).count() as u32
    };
    // Matches booked with `result`, optionally narrowed by the score
    let scan = |result: GameResult, extra: &dyn Fn(&MatchRecord) -> bool| -> u32 {
        count(&|m| m.result == result && extra(m))
    };

    let mut tb = Ladder::default();
    let mut tm = Ladder::default();
    let mut itb = Ladder::default();
    let mut itm = Ladder::default();
    for m in &records {
        tb.count_over(f64::from(m.goal_total()));
        tm.count_under(f64::from(m.goal_total()));
        itb.count_over(f64::from(m.goals_for));
        itm.count_under(f64::from(m.goals_for));
    }

    let goals_ratio = if goals_conceded == 0 {
        f64::from(goals_scored)
    } else {
        f64::from(goals_scored) / f64::from(goals_conceded)
    };
    let per_game = |goals: u32| {
        if team.games_played == 0 {
            0.0
        } else {
            round2(f64::from(goals) / f64::from(team.games_played))
        }
    };
    let points: u32 = records
        .iter()
        .map(|m| match m.result {
            GameResult::Win => 3,
            GameResult::Draw => 1,
            GameResult::Loss => 0,
        })
        .sum();

    Some(StandingsRow {
        match_id: first.match_id,
        game_date: first.date,
        team: team.name().to_string(),
        games_played: records.len() as u32,
        games_wins: scan(GameResult::Win, &|_| true),
        games_draws: scan(GameResult::Draw, &|_| true),
        games_losses: scan(GameResult::Loss, &|_| true),
        goals_scored,
        goals_conceded,
        goals_difference: goals_scored as i64 - goals_conceded as i64,
        goals_amount: goals_scored + goals_conceded,
        goals_ratio: round2(goals_ratio),
        points,
        average_scoring: per_game(goals_scored),
        average_throughput: per_game(goals_conceded),
        victory_dry: scan(GameResult::Win, &|m| m.goals_against == 0),
        lossing_dry: scan(GameResult::Loss, &|m| m.goals_for == 0),
        tb_points: count(&|m| f64::from(m.goal_total()) >= lines.total_line),
        tb05_points: tb.get(0),
        tb15_points: tb.get(1),
        tb25_points: tb.get(2),
        tb35_points: tb.get(3),
        tb45_points: tb.get(4),
        tb55_points: tb.get(5),
        tm_points: count(&|m| f64::from(m.goal_total()) < lines.total_line),
        tm05_points: tm.get(0),
        tm15_points: tm.get(1),
        tm25_points: tm.get(2),
        tm35_points: tm.get(3),
        tm45_points: tm.get(4),
        tm55_points: tm.get(5),
        itb_points: count(&|m| f64::from(m.goals_for) >= lines.individual_line),
        itb05_points: itb.get(0),
        itb15_points: itb.get(1),
        itb25_points: itb.get(2),
        itb35_points: itb.get(3),
        itb45_points: itb.get(4),
        itb55_points: itb.get(5),
        itm_points: count(&|m| f64::from(m.goals_for) < lines.individual_line),
        itm05_points: itm.get(0),
        itm15_points: itm.get(1),
        itm25_points: itm.get(2),
        itm35_points: itm.get(3),
        itm45_points: itm.get(4),
        itm55_points: itm.get(5),
        // Overtime-decided matches are booked as draws, so a draw with
        // unequal scores tells which side took the extra period
        overtime_losses: scan(GameResult::Draw, &|m| m.goals_for < m.goals_against),
        overtime_wins: scan(GameResult::Draw, &|m| m.goals_for > m.goals_against),
        oz_points: count(&|m| m.goals_for > 0 && m.goals_against > 0),
        ozn_points: count(&|m| m.goals_for == 0 || m.goals_against == 0),
        dif_rating: round2(team.dif_rating),
        vo_rating: round2(team.vo_rating),
        elo_rating: round2(team.elo_rating),
        potemkin_rating: round2(team.potemkin_rating),
        power_rating: round2(team.power_rating),
    })
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
