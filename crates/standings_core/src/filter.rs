//! Table filters: choose which part of each team's history the ratings and
//! standings look at.
//!
//! A filter is a side restriction combined with an optional opponent tier,
//! giving twelve views in total.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::registry::Registry;
use crate::types::{MatchRecord, TeamId};

/// Which venue a match must have been played at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    General,
    Home,
    Away,
}

impl Side {
    pub fn accepts(self, record: &MatchRecord) -> bool {
        match self {
            Side::General => true,
            Side::Home => record.is_home,
            Side::Away => !record.is_home,
        }
    }
}

/// Strength third of the team population, ranked by points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Strong,
    Medium,
    Weak,
}

impl Tier {
    /// Index range of this tier among `n` ranked teams.
    ///
    /// Integer division puts any remainder in the weak tier: 10 teams split
    /// 3/3/4.
    pub fn bounds(self, n: usize) -> Range<usize> {
        match self {
            Tier::Strong => 0..n / 3,
            Tier::Medium => n / 3..2 * n / 3,
            Tier::Weak => 2 * n / 3..n,
        }
    }
}

/// Sort `population` by points, highest first.
///
/// The sort is stable and looks at points only, so tied teams keep the order
/// they were given in.
pub fn rank_by_points(registry: &Registry, population: &[TeamId]) -> Vec<TeamId> {
    let mut ranked = population.to_vec();
    ranked.sort_by(|&a, &b| registry.team(b).points.cmp(&registry.team(a).points));
    ranked
}

/// Members of `tier` within `population`
pub fn tier_members(registry: &Registry, population: &[TeamId], tier: Tier) -> HashSet<TeamId> {
    let ranked = rank_by_points(registry, population);
    ranked[tier.bounds(ranked.len())].iter().copied().collect()
}

/// One of the twelve table views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableFilter {
    pub side: Side,
    pub tier: Option<Tier>,
}

impl TableFilter {
    pub const GENERAL: TableFilter = TableFilter::new(Side::General, None);

    /// Every view, in the order the pipeline evaluates them
    pub const ALL: [TableFilter; 12] = [
        TableFilter::new(Side::General, None),
        TableFilter::new(Side::Home, None),
        TableFilter::new(Side::Away, None),
        TableFilter::new(Side::General, Some(Tier::Strong)),
        TableFilter::new(Side::General, Some(Tier::Medium)),
        TableFilter::new(Side::General, Some(Tier::Weak)),
        TableFilter::new(Side::Home, Some(Tier::Strong)),
        TableFilter::new(Side::Home, Some(Tier::Medium)),
        TableFilter::new(Side::Home, Some(Tier::Weak)),
        TableFilter::new(Side::Away, Some(Tier::Strong)),
        TableFilter::new(Side::Away, Some(Tier::Medium)),
        TableFilter::new(Side::Away, Some(Tier::Weak)),
    ];

    pub const fn new(side: Side, tier: Option<Tier>) -> Self {
        Self { side, tier }
    }

    /// Stable view name, e.g. "general", "home", "away_weak"
    pub fn name(&self) -> &'static str {
        match (self.side, self.tier) {
            (Side::General, None) => "general",
            (Side::Home, None) => "home",
            (Side::Away, None) => "away",
            (Side::General, Some(Tier::Strong)) => "strong",
            (Side::General, Some(Tier::Medium)) => "medium",
            (Side::General, Some(Tier::Weak)) => "weak",
            (Side::Home, Some(Tier::Strong)) => "home_strong",
            (Side::Home, Some(Tier::Medium)) => "home_medium",
            (Side::Home, Some(Tier::Weak)) => "home_weak",
            (Side::Away, Some(Tier::Strong)) => "away_strong",
            (Side::Away, Some(Tier::Medium)) => "away_medium",
            (Side::Away, Some(Tier::Weak)) => "away_weak",
        }
    }

    /// Replace every team's filtered view.
    ///
    /// Tiers are computed over the whole registry at the moment of filtering.
    pub fn apply(&self, registry: &mut Registry) {
        let opponents = self.tier.map(|tier| {
            let everyone: Vec<TeamId> = (0..registry.len()).collect();
            tier_members(registry, &everyone, tier)
        });
        let side = self.side;

        for team in registry.teams_mut() {
            team.set_filter(|record| {
                side.accepts(record)
                    && opponents
                        .as_ref()
                        .map_or(true, |set| set.contains(&record.opponent))
            });
        }
    }
}

impl Default for TableFilter {
    fn default() -> Self {
        Self::GENERAL
    }
}

impl fmt::Display for TableFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TableFilter::ALL
            .iter()
            .copied()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| format!("Unknown table filter: {}", s))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
