//! Elo rating with rating-banded K, opponent-tier weighting and home advantage

use crate::filter::{tier_members, Tier};
use crate::registry::Registry;
use crate::types::TeamId;

/// K-factor for teams rated 2400 and above
pub const K_MASTER: f64 = 10.0;
/// K-factor for teams rated from 1500 up to 2400
pub const K_ESTABLISHED: f64 = 15.0;
/// K-factor below 1500
pub const K_PROVISIONAL: f64 = 25.0;

/// Multiplier applied to the K-factor of a home side
pub const HOME_ADVANTAGE: f64 = 1.1;

/// Expected score for a team rated `elo` against `opponent_elo`
pub fn expected_score(elo: f64, opponent_elo: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent_elo - elo) / 400.0))
}

/// K-factor band for a team's current rating
pub fn k_factor(elo: f64) -> f64 {
    if elo >= 2400.0 {
        K_MASTER
    } else if elo >= 1500.0 {
        K_ESTABLISHED
    } else {
        K_PROVISIONAL
    }
}

/// K multiplier for the opponent's tier (1.2 strong, 0.8 weak, 1.0 otherwise)
pub fn tier_weight(opponent_tier: Option<Tier>) -> f64 {
    match opponent_tier {
        Some(Tier::Strong) => 1.2,
        Some(Tier::Weak) => 0.8,
        Some(Tier::Medium) | None => 1.0,
    }
}

/// New rating after one match
pub fn elo_step(
    elo: f64,
    opponent_elo: f64,
    actual: f64,
    is_home: bool,
    opponent_tier: Option<Tier>,
) -> f64 {
    let expected = expected_score(elo, opponent_elo);
    let k = k_factor(elo) * tier_weight(opponent_tier);
    let home_advantage = if is_home { HOME_ADVANTAGE } else { 1.0 };
    elo + k * home_advantage * (actual - expected)
}

/// Walk every team's filtered matches and update that team's own rating.
///
/// Each match is seen once from each participant that has it in view, and
/// every step reads the ratings as they stand at that moment. Tiers are
/// ranked once over `population`.
pub fn calculate_elo(registry: &mut Registry, population: &[TeamId]) {
    let strong = tier_members(registry, population, Tier::Strong);
    let weak = tier_members(registry, population, Tier::Weak);
    let medium = tier_members(registry, population, Tier::Medium);
    let tier_of = |id: TeamId| {
        if strong.contains(&id) {
            Some(Tier::Strong)
        } else if weak.contains(&id) {
            Some(Tier::Weak)
        } else if medium.contains(&id) {
            Some(Tier::Medium)
        } else {
            None
        }
    };

    for &id in population {
        let steps: Vec<(TeamId, f64, bool)> = registry
            .team(id)
            .filtered_matches()
            .map(|m| (m.opponent, m.result.score(), m.is_home))
            .collect();

        for (opponent, actual, is_home) in steps {
            let opponent_elo = registry.team(opponent).elo_rating;
            let team = registry.team_mut(id);
            team.elo_rating = elo_step(
                team.elo_rating,
                opponent_elo,
                actual,
                is_home,
                tier_of(opponent),
            );
        }
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
