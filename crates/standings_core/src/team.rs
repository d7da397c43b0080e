//! Team entity: running counters, rating fields and match logs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::thresholds::{SportLines, LADDER_LINES};
use crate::types::{GameResult, MatchRecord, Overtime, TeamId};

/// Starting values of the five ratings
pub const DEFAULT_DIF: f64 = 0.0;
pub const DEFAULT_VO: f64 = 0.0;
pub const DEFAULT_ELO: f64 = 1500.0;
pub const DEFAULT_POTEMKIN: f64 = 100.0;
pub const DEFAULT_POWER: f64 = 0.0;

/// Counters at the fixed lines 0.5 through 5.5 (see [`LADDER_LINES`])
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ladder([u32; 6]);

impl Ladder {
    /// Count at `LADDER_LINES[index]`
    pub fn get(&self, index: usize) -> u32 {
        self.0[index]
    }

    pub fn counts(&self) -> [u32; 6] {
        self.0
    }

    /// Bump every line with `value >= line`
    pub(crate) fn count_over(&mut self, value: f64) {
        for (count, line) in self.0.iter_mut().zip(LADDER_LINES) {
            if value >= line {
                *count += 1;
            }
        }
    }

    /// Bump every line with `value < line`
    pub(crate) fn count_under(&mut self, value: f64) {
        for (count, line) in self.0.iter_mut().zip(LADDER_LINES) {
            if value < line {
                *count += 1;
            }
        }
    }
}

/// One side of a finished match, as handed to [`Team::update_stats`]
#[derive(Debug, Clone)]
pub struct MatchSide {
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub result: GameResult,
    pub is_home: bool,
    pub opponent: TeamId,
    pub overtime: Overtime,
    pub match_id: i64,
    pub date: NaiveDateTime,
}

/// A team and everything accumulated about it within one registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    name: String,
    pub games_played: u32,
    pub games_wins: u32,
    pub games_draws: u32,
    pub games_losses: u32,
    pub overtime_wins: u32,
    pub overtime_losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub points: u32,
    pub victory_dry: u32,
    pub lossing_dry: u32,
    /// Combined goals over/under the sport's default line
    pub tb_points: u32,
    pub tm_points: u32,
    /// Own goals over/under the sport's individual line
    pub itb_points: u32,
    pub itm_points: u32,
    pub tb_ladder: Ladder,
    pub tm_ladder: Ladder,
    pub itb_ladder: Ladder,
    pub itm_ladder: Ladder,
    /// Both teams scored
    pub oz_points: u32,
    pub ozn_points: u32,
    pub dif_rating: f64,
    pub vo_rating: f64,
    pub elo_rating: f64,
    pub potemkin_rating: f64,
    pub power_rating: f64,
    matches: Vec<MatchRecord>,
    /// Indices into `matches` selected by the active table filter
    filtered: Vec<usize>,
}

impl Team {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            games_played: 0,
            games_wins: 0,
            games_draws: 0,
            games_losses: 0,
            overtime_wins: 0,
            overtime_losses: 0,
            goals_scored: 0,
            goals_conceded: 0,
            points: 0,
            victory_dry: 0,
            lossing_dry: 0,
            tb_points: 0,
            tm_points: 0,
            itb_points: 0,
            itm_points: 0,
            tb_ladder: Ladder::default(),
            tm_ladder: Ladder::default(),
            itb_ladder: Ladder::default(),
            itm_ladder: Ladder::default(),
            oz_points: 0,
            ozn_points: 0,
            dif_rating: DEFAULT_DIF,
            vo_rating: DEFAULT_VO,
            elo_rating: DEFAULT_ELO,
            potemkin_rating: DEFAULT_POTEMKIN,
            power_rating: DEFAULT_POWER,
            matches: Vec::new(),
            filtered: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full match log in the order matches were reported
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Matches selected by the last table filter
    pub fn filtered_matches(&self) -> impl Iterator<Item = &MatchRecord> + '_ {
        self.filtered.iter().map(move |&i| &self.matches[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_filtered_matches(&self) -> bool {
        !self.filtered.is_empty()
    }

    /// Replace the filtered view with the matches satisfying `keep`
    pub fn set_filter<F>(&mut self, keep: F)
    where
        F: Fn(&MatchRecord) -> bool,
    {
        self.filtered = self
            .matches
            .iter()
            .enumerate()
            .filter(|(_, m)| keep(m))
            .map(|(i, _)| i)
            .collect();
    }

    /// Apply one side of a finished match.
    ///
    /// Threshold counters (default lines and the ladder) are checked against
    /// the cumulative totals after this match, while oz/ozn only look at the
    /// match itself.
    pub fn update_stats(&mut self, side: MatchSide, lines: &SportLines) {
        self.games_played += 1;
        self.goals_scored += side.goals_scored;
        self.goals_conceded += side.goals_conceded;
        self.matches.push(MatchRecord {
            goals_for: side.goals_scored,
            goals_against: side.goals_conceded,
            result: side.result,
            is_home: side.is_home,
            opponent: side.opponent,
            match_id: side.match_id,
            date: side.date,
        });

        match side.result {
            GameResult::Win => {
                if side.overtime.is_extra_time() {
                    self.overtime_wins += 1;
                }
                if side.goals_conceded == 0 {
                    self.victory_dry += 1;
                }
                self.games_wins += 1;
                // Regulation wins are worth more than overtime wins
                self.points += if side.overtime.is_empty() { 3 } else { 2 };
            }
            GameResult::Draw => {
                self.games_draws += 1;
            }
            GameResult::Loss => {
                if !side.overtime.is_empty() {
                    self.overtime_losses += 1;
                }
                self.games_losses += 1;
                if side.goals_scored == 0 {
                    self.lossing_dry += 1;
                }
            }
        }

        let combined = f64::from(self.goals_scored + self.goals_conceded);
        let individual = f64::from(self.goals_scored);

        if combined >= lines.total_line {
            self.tb_points += 1;
        } else {
            self.tm_points += 1;
        }
        if individual >= lines.individual_line {
            self.itb_points += 1;
        } else {
            self.itm_points += 1;
        }

        self.tb_ladder.count_over(combined);
        self.tm_ladder.count_under(combined);
        self.itb_ladder.count_over(individual);
        self.itm_ladder.count_under(individual);

        if side.goals_scored > 0 && side.goals_conceded > 0 {
            self.oz_points += 1;
        } else {
            self.ozn_points += 1;
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_scored as i64 - self.goals_conceded as i64
    }

    pub fn goal_amount(&self) -> u32 {
        self.goals_scored + self.goals_conceded
    }

    /// Scored over conceded, or plain scored when nothing was conceded
    pub fn goal_ratio(&self) -> f64 {
        if self.goals_conceded == 0 {
            f64::from(self.goals_scored)
        } else {
            f64::from(self.goals_scored) / f64::from(self.goals_conceded)
        }
    }

    pub fn average_scoring(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.goals_scored) / f64::from(self.games_played)
    }

    pub fn average_throughput(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.goals_conceded) / f64::from(self.games_played)
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
