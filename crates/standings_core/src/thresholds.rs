//! Per-sport betting lines used by the over/under counters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, StandingsError};

/// Fixed lines of the over/under ladder, in ascending order
pub const LADDER_LINES: [f64; 6] = [0.5, 1.5, 2.5, 3.5, 4.5, 5.5];

/// Combined-goals and individual-goals lines for one sport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportLines {
    /// Default line for combined goals (tb/tm)
    pub total_line: f64,
    /// Default line for a team's own goals (itb/itm)
    pub individual_line: f64,
}

impl SportLines {
    pub const SOCCER: SportLines = SportLines {
        total_line: 2.5,
        individual_line: 1.5,
    };

    pub const ICE_HOCKEY: SportLines = SportLines {
        total_line: 4.5,
        individual_line: 2.5,
    };
}

/// Lookup table from sport name to its lines.
///
/// Unknown sports are an error rather than silently falling back to a
/// default, since the wrong line skews every tb/tm counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportThresholds {
    #[serde(default)]
    sports: BTreeMap<String, SportLines>,
}

impl Default for SportThresholds {
    fn default() -> Self {
        let mut sports = BTreeMap::new();
        sports.insert("Soccer".to_string(), SportLines::SOCCER);
        sports.insert("Ice Hockey".to_string(), SportLines::ICE_HOCKEY);
        Self { sports }
    }
}

impl SportThresholds {
    /// Empty table with no sports at all
    pub fn empty() -> Self {
        Self {
            sports: BTreeMap::new(),
        }
    }

    /// Parse a TOML table of `[sports."Name"]` sections
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let thresholds: SportThresholds = toml::from_str(contents)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Add or replace a sport
    pub fn insert(&mut self, sport: &str, lines: SportLines) {
        self.sports.insert(sport.to_string(), lines);
    }

    /// Merge `other` on top of `self`, entries in `other` win
    pub fn merge(&mut self, other: SportThresholds) {
        self.sports.extend(other.sports);
    }

    pub fn lines_for(&self, sport: &str) -> Result<SportLines> {
        self.sports
            .get(sport)
            .copied()
            .ok_or_else(|| StandingsError::UnknownSport(sport.to_string()))
    }

    pub fn sports(&self) -> impl Iterator<Item = &str> {
        self.sports.keys().map(String::as_str)
    }

    fn validate(&self) -> Result<()> {
        for (sport, lines) in &self.sports {
            for (label, value) in [
                ("total_line", lines.total_line),
                ("individual_line", lines.individual_line),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(StandingsError::InvalidThreshold {
                        sport: sport.clone(),
                        reason: format!("{} must be a non-negative number, got {}", label, value),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "thresholds_tests.rs"]
mod thresholds_tests;
