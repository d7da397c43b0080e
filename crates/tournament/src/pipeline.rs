//! Replays one tournament's fixtures through the standings engine.
//!
//! After every finished match all twelve table views are rebuilt. Both teams
//! of every fixture, played or not, get a snapshot of their rows in the latest
//! views, keyed `"{match_id}_{team}"`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use standings_core::{
    calculate_ratings, get_standings, MatchReport, Overtime, Registry, Standings, StandingsRow,
    TableFilter,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::TournamentConfig;
use crate::error::Result;

/// A scheduled or finished match from the input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub match_id: i64,
    #[serde(default)]
    pub sport_id: i64,
    #[serde(default)]
    pub country_id: i64,
    pub date: NaiveDateTime,
    pub home_team: String,
    pub away_team: String,
    /// `None` until the match is played
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    #[serde(default)]
    pub overtime: Overtime,
    #[serde(default)]
    pub season_id: i64,
    #[serde(default)]
    pub stage_id: i64,
}

impl Fixture {
    pub fn is_finished(&self) -> bool {
        self.home_goals.is_some() && self.away_goals.is_some()
    }

    /// Match report for the engine, if both scores are known
    pub fn to_report(&self, tournament_id: i64) -> Option<MatchReport> {
        Some(MatchReport {
            match_id: self.match_id,
            sport_id: self.sport_id,
            country_id: self.country_id,
            tournament_id,
            date: self.date,
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_goals: self.home_goals?,
            away_goals: self.away_goals?,
            overtime: self.overtime.clone(),
            season_id: self.season_id,
            stage_id: self.stage_id,
        })
    }
}

/// One tournament as read from the input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentInput {
    pub tournament_id: i64,
    /// Sport name, used to look up the lines
    pub sport: String,
    pub teams: Vec<String>,
    /// Fixtures in the order they are replayed
    pub matches: Vec<Fixture>,
}

/// A team's rows across the views at the time of one fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub match_id: i64,
    pub team: String,
    /// View name to the team's row; views without the team are left out
    pub views: BTreeMap<String, StandingsRow>,
}

/// Everything computed for one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentOutput {
    pub tournament_id: i64,
    pub sport: String,
    /// Keyed `"{match_id}_{team}"`
    pub snapshots: BTreeMap<String, TeamSnapshot>,
    /// View name to the standings after the last finished match
    pub final_standings: BTreeMap<String, Standings>,
}

/// Snapshot key for a team at a fixture
pub fn snapshot_key(match_id: i64, team: &str) -> String {
    format!("{}_{}", match_id, team)
}

/// Rebuild every view: filter, rate, then collect standings
pub fn evaluate_views(registry: &mut Registry, config: &TournamentConfig) -> BTreeMap<String, Standings> {
    let mut views = BTreeMap::new();
    for filter in TableFilter::ALL {
        filter.apply(registry);
        calculate_ratings(registry, &config.ratings);
        views.insert(filter.name().to_string(), get_standings(registry));
    }
    views
}

fn snapshot(views: &BTreeMap<String, Standings>, match_id: i64, team: &str) -> TeamSnapshot {
    TeamSnapshot {
        match_id,
        team: team.to_string(),
        views: views
            .iter()
            .filter_map(|(view, standings)| standings.get(team).map(|row| (view.clone(), row.clone())))
            .collect(),
    }
}

/// Process a whole tournament in a fresh registry
pub fn process_tournament(input: &TournamentInput, config: &TournamentConfig) -> Result<TournamentOutput> {
    let lines = config.thresholds.lines_for(&input.sport)?;
    let mut registry = Registry::new(lines);
    for team in &input.teams {
        registry.add_team(team);
    }

    info!(
        tournament_id = input.tournament_id,
        sport = %input.sport,
        teams = registry.len(),
        fixtures = input.matches.len(),
        "Processing tournament"
    );

    let mut latest: BTreeMap<String, Standings> = BTreeMap::new();
    let mut snapshots = BTreeMap::new();
    let mut played = 0;

    for fixture in &input.matches {
        match fixture.to_report(input.tournament_id) {
            Some(report) => {
                // Ratings accumulate on every evaluation, so a skipped match
                // must not trigger one
                if registry.add_match(&report) {
                    latest = evaluate_views(&mut registry, config);
                    played += 1;
                }
            }
            None => debug!(match_id = fixture.match_id, "Fixture not played yet"),
        }

        for team in [&fixture.home_team, &fixture.away_team] {
            snapshots.insert(
                snapshot_key(fixture.match_id, team),
                snapshot(&latest, fixture.match_id, team),
            );
        }
    }

    info!(
        tournament_id = input.tournament_id,
        played,
        snapshots = snapshots.len(),
        "Tournament done"
    );

    Ok(TournamentOutput {
        tournament_id: input.tournament_id,
        sport: input.sport.clone(),
        snapshots,
        final_standings: latest,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
