//! Power rating: accumulate empirical scoreline values.

use crate::registry::Registry;
use crate::types::TeamId;

/// Goals above this are treated as this many
pub const MAX_TABLE_GOALS: u32 = 9;

/// Scoreline values, `POWER_TABLE[scored][conceded]`.
///
/// Equal scores are worth 100; the value grows with the margin of victory.
pub const POWER_TABLE: [[u32; 10]; 10] = [
    [100, 80, 61, 46, 32, 22, 13, 6, 0, 0],
    [120, 100, 81, 64, 49, 36, 25, 16, 9, 0],
    [139, 119, 100, 82, 66, 51, 39, 28, 19, 12],
    [154, 136, 118, 100, 83, 68, 54, 42, 31, 22],
    [168, 151, 134, 117, 100, 84, 70, 56, 44, 34],
    [178, 164, 149, 132, 116, 100, 85, 71, 58, 47],
    [187, 175, 161, 146, 130, 115, 100, 86, 74, 60],
    [194, 184, 172, 158, 144, 129, 113, 100, 87, 74],
    [200, 191, 181, 169, 156, 142, 128, 113, 100, 87],
    [200, 197, 188, 178, 166, 153, 140, 126, 113, 100],
];

/// Table value for a scoreline, goals clamped to [`MAX_TABLE_GOALS`]
pub fn power_value(scored: u32, conceded: u32) -> f64 {
    let scored = scored.min(MAX_TABLE_GOALS) as usize;
    let conceded = conceded.min(MAX_TABLE_GOALS) as usize;
    f64::from(POWER_TABLE[scored][conceded])
}

/// Look up a value by its two-digit key, e.g. `"31"` for a 3–1 scoreline
pub fn power_by_key(key: &str) -> Option<u32> {
    let mut digits = key.chars().map(|c| c.to_digit(10));
    match (digits.next(), digits.next(), digits.next()) {
        (Some(Some(scored)), Some(Some(conceded)), None) => {
            Some(POWER_TABLE[scored as usize][conceded as usize])
        }
        _ => None,
    }
}

/// Add the scoreline value of each filtered match to both participants
pub fn calculate_power(registry: &mut Registry, population: &[TeamId]) {
    for &id in population {
        let steps: Vec<(TeamId, u32, u32)> = registry
            .team(id)
            .filtered_matches()
            .map(|m| (m.opponent, m.goals_for, m.goals_against))
            .collect();

        for (opponent, goals, opponent_goals) in steps {
            registry.team_mut(id).power_rating += power_value(goals, opponent_goals);
            registry.team_mut(opponent).power_rating += power_value(opponent_goals, goals);
        }
    }
}

#[cfg(test)]
#[path = "power_tests.rs"]
mod power_tests;
