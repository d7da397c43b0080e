//! VO rating: points of beaten opponents, normalised to the points total.

use crate::registry::Registry;
use crate::types::{GameResult, TeamId};

/// Raw VO score of one team: opponent points over filtered wins plus half of
/// opponent points over filtered draws
pub fn vo_raw(registry: &Registry, id: TeamId) -> f64 {
    registry
        .team(id)
        .filtered_matches()
        .map(|record| {
            let opponent_points = f64::from(registry.team(record.opponent).points);
            match record.result {
                GameResult::Win => opponent_points,
                GameResult::Draw => 0.5 * opponent_points,
                GameResult::Loss => 0.0,
            }
        })
        .sum()
}

/// Store raw VO scores, then divide each by the global scale
/// Σ points / Σ raw over the population.
///
/// Without any raw score, or with zero points in total, the raw values stay.
pub fn calculate_vo(registry: &mut Registry, population: &[TeamId]) {
    let total_points: f64 = population
        .iter()
        .map(|&id| f64::from(registry.team(id).points))
        .sum();

    let raw: Vec<f64> = population.iter().map(|&id| vo_raw(registry, id)).collect();
    let total_raw: f64 = raw.iter().sum();

    for (&id, &score) in population.iter().zip(&raw) {
        registry.team_mut(id).vo_rating = score;
    }

    if total_raw > 0.0 {
        let scale = total_points / total_raw;
        if scale != 0.0 {
            for &id in population {
                registry.team_mut(id).vo_rating /= scale;
            }
        }
    }
}

#[cfg(test)]
#[path = "vo_tests.rs"]
mod vo_tests;
