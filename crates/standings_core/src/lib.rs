//! Standings and team rating engine.
//!
//! A [`Registry`] holds every team of one tournament. Finished matches are
//! folded in with [`Registry::add_match`], a [`TableFilter`] selects the view
//! (home/away, opponent strength tier), the five rating strategies run over
//! the filtered view and [`get_standings`] rebuilds a flat record per team.

pub mod error;
pub mod filter;
pub mod processor;
pub mod rating;
pub mod registry;
pub mod standings;
pub mod team;
pub mod thresholds;
pub mod types;

#[cfg(test)]
mod test_support;

pub use error::{Result, StandingsError};
pub use filter::{rank_by_points, tier_members, Side, TableFilter, Tier};
pub use processor::{derive_results, MatchReport};
pub use rating::{calculate_ratings, RatingKind};
pub use registry::Registry;
pub use standings::{get_standings, round2, Standings, StandingsRow};
pub use team::{
    Ladder, MatchSide, Team, DEFAULT_DIF, DEFAULT_ELO, DEFAULT_POTEMKIN, DEFAULT_POWER, DEFAULT_VO,
};
pub use thresholds::{SportLines, SportThresholds, LADDER_LINES};
pub use types::{GameResult, MatchRecord, Overtime, TeamId};
