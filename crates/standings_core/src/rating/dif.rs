//! DIF rating: solve a linear system built from goal differences of losses.

use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;
use tracing::debug;

use crate::registry::Registry;
use crate::types::{GameResult, TeamId};

/// Build the (A, b) system for `population`, before the identity is added.
///
/// Row i holds the signed goal difference of each filtered loss of team i
/// against opponent j (if j is in the population); a later loss to the same
/// opponent replaces an earlier one. b[i] is the absolute value of the summed
/// loss differences.
pub fn dif_system(registry: &Registry, population: &[TeamId]) -> (DMatrix<f64>, DVector<f64>) {
    let n = population.len();
    let index: HashMap<TeamId, usize> = population
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i))
        .collect();

    let mut a = DMatrix::<f64>::zeros(n, n);
    let mut b = DVector::<f64>::zeros(n);

    for (i, &id) in population.iter().enumerate() {
        let mut total = 0i64;
        for record in registry
            .team(id)
            .filtered_matches()
            .filter(|m| m.result == GameResult::Loss)
        {
            total += record.goal_difference();
            if let Some(&j) = index.get(&record.opponent) {
                a[(i, j)] = record.goal_difference() as f64;
            }
        }
        b[i] = total.abs() as f64;
    }

    (a, b)
}

/// Solve (A + I)·x = b and store x as each team's DIF rating.
///
/// A singular system leaves every rating untouched.
pub fn calculate_dif(registry: &mut Registry, population: &[TeamId]) {
    let n = population.len();
    if n == 0 {
        return;
    }
    let (a, b) = dif_system(registry, population);
    let a = a + DMatrix::<f64>::identity(n, n);

    let lu = a.lu();
    if lu.determinant() == 0.0 {
        debug!(teams = n, "DIF system is singular, keeping previous ratings");
        return;
    }
    let Some(x) = lu.solve(&b) else {
        debug!(teams = n, "DIF solve failed, keeping previous ratings");
        return;
    };
    if x.iter().any(|v| !v.is_finite()) {
        debug!(teams = n, "DIF solution is not finite, keeping previous ratings");
        return;
    }

    for (i, &id) in population.iter().enumerate() {
        registry.team_mut(id).dif_rating = x[i];
    }
}

#[cfg(test)]
#[path = "dif_tests.rs"]
mod dif_tests;
