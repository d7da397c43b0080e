//! Core value types shared by the match accounting and rating code.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a team inside the [`Registry`](crate::Registry) that owns it.
///
/// Ids are only meaningful for the registry that handed them out and are
/// invalidated by [`Registry::clear`](crate::Registry::clear).
pub type TeamId = usize;

/// Outcome of a single match from one side's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// Literal marker used in match logs ("win", "draw", "loss")
    pub fn marker(self) -> &'static str {
        match self {
            GameResult::Win => "win",
            GameResult::Draw => "draw",
            GameResult::Loss => "loss",
        }
    }

    /// Score for rating purposes (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }

    /// The same match seen from the other side
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// How a match was decided beyond regulation time.
///
/// Upstream feeds carry this as a free-form optional string: `""` or missing
/// for regulation, `"ot"` for overtime, `"ap"` for a shootout. Anything else
/// is kept verbatim and still counts as "not regulation".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Overtime {
    #[default]
    None,
    Overtime,
    Penalties,
    Other(String),
}

impl Overtime {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Overtime::None,
            Some("ot") => Overtime::Overtime,
            Some("ap") => Overtime::Penalties,
            Some(other) => Overtime::Other(other.to_string()),
        }
    }

    /// Regulation result (no marker at all)
    pub fn is_empty(&self) -> bool {
        matches!(self, Overtime::None)
    }

    /// Marker is one of the recognised extra-time kinds ("ot" or "ap")
    pub fn is_extra_time(&self) -> bool {
        matches!(self, Overtime::Overtime | Overtime::Penalties)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Overtime::None => "",
            Overtime::Overtime => "ot",
            Overtime::Penalties => "ap",
            Overtime::Other(s) => s,
        }
    }
}

impl From<Option<String>> for Overtime {
    fn from(raw: Option<String>) -> Self {
        Overtime::parse(raw.as_deref())
    }
}

impl From<Overtime> for Option<String> {
    fn from(value: Overtime) -> Self {
        match value {
            Overtime::None => None,
            other => Some(other.as_str().to_string()),
        }
    }
}

/// One raw entry in a team's match log, always from that team's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub goals_for: u32,
    pub goals_against: u32,
    pub result: GameResult,
    pub is_home: bool,
    /// Opponent in the same registry (a reference, not an owned team)
    pub opponent: TeamId,
    pub match_id: i64,
    pub date: NaiveDateTime,
}

impl MatchRecord {
    /// Signed goal difference from this side's perspective
    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn goal_total(&self) -> u32 {
        self.goals_for + self.goals_against
    }
}
