//! Potemkin rating: both sides stake part of their rating and split the pot
//! by goals.

use crate::registry::Registry;
use crate::types::TeamId;

/// Share of the current rating each side puts into the pot
pub const STAKE_SHARE: f64 = 0.1;

/// Rating changes for (side, opponent) given both current ratings and goals.
///
/// The two deltas always sum to zero.
pub fn potemkin_deltas(rating: f64, opponent_rating: f64, goals: u32, opponent_goals: u32) -> (f64, f64) {
    let stake = rating * STAKE_SHARE;
    let opponent_stake = opponent_rating * STAKE_SHARE;
    let pot = stake + opponent_stake;

    let total_goals = goals + opponent_goals;
    let (share, opponent_share) = if total_goals > 0 {
        let total = f64::from(total_goals);
        (
            f64::from(goals) / total * pot,
            f64::from(opponent_goals) / total * pot,
        )
    } else {
        (pot / 2.0, pot / 2.0)
    };

    (share - stake, opponent_share - opponent_stake)
}

/// For every filtered match of every team in `population`, settle the pot
/// between the team and its opponent
pub fn calculate_potemkin(registry: &mut Registry, population: &[TeamId]) {
    for &id in population {
        let steps: Vec<(TeamId, u32, u32)> = registry
            .team(id)
            .filtered_matches()
            .map(|m| (m.opponent, m.goals_for, m.goals_against))
            .collect();

        for (opponent, goals, opponent_goals) in steps {
            let (delta, opponent_delta) = potemkin_deltas(
                registry.team(id).potemkin_rating,
                registry.team(opponent).potemkin_rating,
                goals,
                opponent_goals,
            );
            registry.team_mut(id).potemkin_rating += delta;
            registry.team_mut(opponent).potemkin_rating += opponent_delta;
        }
    }
}

#[cfg(test)]
#[path = "potemkin_tests.rs"]
mod potemkin_tests;
