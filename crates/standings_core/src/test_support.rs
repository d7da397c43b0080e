//! Shared fixtures for unit tests

use chrono::{NaiveDate, NaiveDateTime};

use crate::processor::MatchReport;
use crate::registry::Registry;
use crate::thresholds::SportLines;
use crate::types::Overtime;

pub fn day(n: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        + chrono::Duration::days(n as i64)
}

pub fn report(match_id: i64, home: &str, away: &str, home_goals: u32, away_goals: u32) -> MatchReport {
    MatchReport {
        match_id,
        sport_id: 1,
        country_id: 1,
        tournament_id: 1,
        date: day(match_id as u32),
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_goals,
        away_goals,
        overtime: Overtime::None,
        season_id: 1,
        stage_id: 1,
    }
}

pub fn registry_with(names: &[&str]) -> Registry {
    let mut registry = Registry::new(SportLines::SOCCER);
    for name in names {
        registry.add_team(name);
    }
    registry
}
