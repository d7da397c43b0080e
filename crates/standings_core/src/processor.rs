//! Applies one finished match to both participating teams.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::team::{MatchSide, Team};
use crate::thresholds::SportLines;
use crate::types::{GameResult, Overtime, TeamId};

/// A finished match as reported by the upstream match source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_id: i64,
    pub sport_id: i64,
    pub country_id: i64,
    pub tournament_id: i64,
    pub date: NaiveDateTime,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    #[serde(default)]
    pub overtime: Overtime,
    pub season_id: i64,
    pub stage_id: i64,
}

/// Win/draw/loss for (home, away).
///
/// Only regulation results produce a winner. A match decided in overtime or a
/// shootout is booked as a draw for both sides even when the score differs.
pub fn derive_results(home_goals: u32, away_goals: u32, overtime: &Overtime) -> (GameResult, GameResult) {
    let home = if home_goals > away_goals && overtime.is_empty() {
        GameResult::Win
    } else if home_goals < away_goals && overtime.is_empty() {
        GameResult::Loss
    } else {
        GameResult::Draw
    };
    (home, home.flip())
}

/// Update both teams for `report`, home side first
pub fn play(
    teams: &mut [Team],
    home: TeamId,
    away: TeamId,
    report: &MatchReport,
    lines: &SportLines,
) {
    let (home_result, away_result) =
        derive_results(report.home_goals, report.away_goals, &report.overtime);

    teams[home].update_stats(
        MatchSide {
            goals_scored: report.home_goals,
            goals_conceded: report.away_goals,
            result: home_result,
            is_home: true,
            opponent: away,
            overtime: report.overtime.clone(),
            match_id: report.match_id,
            date: report.date,
        },
        lines,
    );
    teams[away].update_stats(
        MatchSide {
            goals_scored: report.away_goals,
            goals_conceded: report.home_goals,
            result: away_result,
            is_home: false,
            opponent: home,
            overtime: report.overtime.clone(),
            match_id: report.match_id,
            date: report.date,
        },
        lines,
    );
}

#[cfg(test)]
#[path = "processor_tests.rs"]
mod processor_tests;
