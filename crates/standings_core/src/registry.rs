//! Per-tournament store of teams.
//!
//! A [`Registry`] is an explicit handle: construct one per tournament, feed it
//! matches, and either drop it or [`clear`](Registry::clear) it before the
//! next tournament. It is not shared between threads.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::processor::{self, MatchReport};
use crate::team::Team;
use crate::thresholds::SportLines;
use crate::types::TeamId;

#[derive(Debug, Clone)]
pub struct Registry {
    lines: SportLines,
    /// Teams in registration order; `TeamId` indexes this
    teams: Vec<Team>,
    by_name: HashMap<String, TeamId>,
}

impl Registry {
    /// Create an empty registry for a sport with the given lines
    pub fn new(lines: SportLines) -> Self {
        Self {
            lines,
            teams: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn lines(&self) -> &SportLines {
        &self.lines
    }

    /// Register a team, returning its id. Registering a known name is a no-op.
    pub fn add_team(&mut self, name: &str) -> TeamId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = self.teams.len();
        self.teams.push(Team::new(name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn get_team(&self, name: &str) -> Option<&Team> {
        self.by_name.get(name).map(|&id| &self.teams[id])
    }

    pub fn team_id(&self, name: &str) -> Option<TeamId> {
        self.by_name.get(name).copied()
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id]
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.teams[id]
    }

    /// All teams in registration order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn teams_mut(&mut self) -> &mut [Team] {
        &mut self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Ids of teams with a non-empty filtered view, in registration order
    pub fn filtered_population(&self) -> Vec<TeamId> {
        self.teams
            .iter()
            .enumerate()
            .filter(|(_, t)| t.has_filtered_matches())
            .map(|(id, _)| id)
            .collect()
    }

    /// Apply a finished match.
    ///
    /// Returns `false` without touching any team when either side was never
    /// registered.
    pub fn add_match(&mut self, report: &MatchReport) -> bool {
        let (home, away) = match (
            self.team_id(&report.home_team),
            self.team_id(&report.away_team),
        ) {
            (Some(home), Some(away)) => (home, away),
            (home, away) => {
                warn!(
                    match_id = report.match_id,
                    home = %report.home_team,
                    away = %report.away_team,
                    home_known = home.is_some(),
                    away_known = away.is_some(),
                    "Skipping match with unregistered team"
                );
                return false;
            }
        };

        debug!(
            match_id = report.match_id,
            "Applying {} {}:{} {}",
            report.home_team,
            report.home_goals,
            report.away_goals,
            report.away_team
        );
        processor::play(&mut self.teams, home, away, report, &self.lines);
        true
    }

    /// Drop every team. Ids handed out before are no longer valid.
    pub fn clear(&mut self) {
        self.teams.clear();
        self.by_name.clear();
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
