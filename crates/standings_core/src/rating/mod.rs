//! Team rating strategies.
//!
//! Each strategy reads the filtered views left behind by the last
//! [`TableFilter`](crate::TableFilter) and updates one rating field in place.
//! The rated population is every team with at least one filtered match; teams
//! outside it can still be read (and for Potemkin/Power, written) as
//! opponents.

mod dif;
mod elo;
mod potemkin;
mod power;
mod vo;

pub use dif::*;
pub use elo::*;
pub use potemkin::*;
pub use power::*;
pub use vo::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::registry::Registry;

/// The five rating strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingKind {
    Dif,
    Vo,
    Elo,
    Potemkin,
    Power,
}

impl RatingKind {
    pub const ALL: [RatingKind; 5] = [
        RatingKind::Dif,
        RatingKind::Vo,
        RatingKind::Elo,
        RatingKind::Potemkin,
        RatingKind::Power,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RatingKind::Dif => "dif",
            RatingKind::Vo => "vo",
            RatingKind::Elo => "elo",
            RatingKind::Potemkin => "potemkin",
            RatingKind::Power => "power",
        }
    }

    /// Run this strategy over the current filtered views
    pub fn calculate(self, registry: &mut Registry) {
        let population = registry.filtered_population();
        debug!(rating = self.name(), teams = population.len(), "Calculating rating");
        match self {
            RatingKind::Dif => calculate_dif(registry, &population),
            RatingKind::Vo => calculate_vo(registry, &population),
            RatingKind::Elo => calculate_elo(registry, &population),
            RatingKind::Potemkin => calculate_potemkin(registry, &population),
            RatingKind::Power => calculate_power(registry, &population),
        }
    }
}

impl fmt::Display for RatingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RatingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        RatingKind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| format!("Unknown rating: {}", s))
    }
}

/// Run several strategies in order
pub fn calculate_ratings(registry: &mut Registry, kinds: &[RatingKind]) {
    for kind in kinds {
        kind.calculate(registry);
    }
}
