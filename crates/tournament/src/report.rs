//! Plain-text standings tables

use standings_core::{Standings, StandingsRow};

/// Rows ordered for display: points, then goal difference, then goals scored
pub fn ranked_rows(standings: &Standings) -> Vec<&StandingsRow> {
    let mut rows: Vec<&StandingsRow> = standings.values().collect();
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goals_difference.cmp(&a.goals_difference))
            .then(b.goals_scored.cmp(&a.goals_scored))
            .then(a.team.cmp(&b.team))
    });
    rows
}

/// Generate a text table for one view
pub fn generate_table(title: &str, standings: &Standings) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== {} ===\n\n", title));
    report.push_str(&format!(
        "{:<4} {:<24} {:>3} {:>3} {:>3} {:>3} {:>7} {:>4} {:>8} {:>8} {:>8}\n",
        "#", "Team", "GP", "W", "D", "L", "Goals", "Pts", "Elo", "Potemkin", "Power"
    ));
    report.push_str(&"-".repeat(86));
    report.push('\n');

    for (i, row) in ranked_rows(standings).iter().enumerate() {
        report.push_str(&format!(
            "{:<4} {:<24} {:>3} {:>3} {:>3} {:>3} {:>7} {:>4} {:>8.1} {:>8.1} {:>8.1}\n",
            i + 1,
            row.team,
            row.games_played,
            row.games_wins,
            row.games_draws,
            row.games_losses,
            format!("{}:{}", row.goals_scored, row.goals_conceded),
            row.points,
            row.elo_rating,
            row.potemkin_rating,
            row.power_rating
        ));
    }

    report
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
