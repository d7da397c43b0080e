use super::*;
use chrono::NaiveDate;

fn date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap()
}

fn side(scored: u32, conceded: u32, result: GameResult, overtime: Overtime) -> MatchSide {
    MatchSide {
        goals_scored: scored,
        goals_conceded: conceded,
        result,
        is_home: true,
        opponent: 1,
        overtime,
        match_id: 1,
        date: date(),
    }
}

#[test]
fn test_team_initialization() {
    let team = Team::new("Team A");
    assert_eq!(team.name(), "Team A");
    assert_eq!(team.games_played, 0);
    assert_eq!(team.goals_scored, 0);
    assert_eq!(team.elo_rating, 1500.0);
    assert_eq!(team.potemkin_rating, 100.0);
    assert_eq!(team.dif_rating, 0.0);
    assert!(team.matches().is_empty());
    assert!(!team.has_filtered_matches());
}

#[test]
fn test_update_stats_win() {
    let mut team = Team::new("Team A");
    team.update_stats(side(2, 1, GameResult::Win, Overtime::None), &SportLines::SOCCER);

    assert_eq!(team.games_played, 1);
    assert_eq!(team.games_wins, 1);
    assert_eq!(team.goals_scored, 2);
    assert_eq!(team.goals_conceded, 1);
    assert_eq!(team.points, 3);
    assert_eq!(team.victory_dry, 0);
    assert_eq!(team.matches().len(), 1);
}

#[test]
fn test_overtime_win_worth_two_points() {
    let mut team = Team::new("Team A");
    team.update_stats(
        side(3, 0, GameResult::Win, Overtime::Overtime),
        &SportLines::ICE_HOCKEY,
    );
    assert_eq!(team.points, 2);
    assert_eq!(team.overtime_wins, 1);
    assert_eq!(team.victory_dry, 1);

    // Unrecognised markers still cost the regulation bonus but are not overtime wins
    team.update_stats(
        side(2, 1, GameResult::Win, Overtime::Other("so".into())),
        &SportLines::ICE_HOCKEY,
    );
    assert_eq!(team.points, 4);
    assert_eq!(team.overtime_wins, 1);
}

#[test]
fn test_update_stats_draw_awards_nothing() {
    let mut team = Team::new("Team A");
    team.update_stats(side(1, 1, GameResult::Draw, Overtime::None), &SportLines::SOCCER);

    assert_eq!(team.games_played, 1);
    assert_eq!(team.games_draws, 1);
    assert_eq!(team.points, 0);
}

#[test]
fn test_update_stats_loss() {
    let mut team = Team::new("Team A");
    team.update_stats(side(0, 2, GameResult::Loss, Overtime::None), &SportLines::SOCCER);

    assert_eq!(team.games_played, 1);
    assert_eq!(team.games_losses, 1);
    assert_eq!(team.lossing_dry, 1);
    assert_eq!(team.overtime_losses, 0);
    assert_eq!(team.points, 0);

    team.update_stats(
        side(1, 2, GameResult::Loss, Overtime::Other("x".into())),
        &SportLines::SOCCER,
    );
    // Any marker counts for overtime losses
    assert_eq!(team.overtime_losses, 1);
    assert_eq!(team.lossing_dry, 1);
}

#[test]
fn test_thresholds_use_running_totals() {
    let mut team = Team::new("Team A");
    let lines = SportLines::SOCCER;

    // 1-0: combined so far 1, own goals so far 1
    team.update_stats(side(1, 0, GameResult::Win, Overtime::None), &lines);
    assert_eq!((team.tb_points, team.tm_points), (0, 1));
    assert_eq!((team.itb_points, team.itm_points), (0, 1));
    assert_eq!(team.tb_ladder.counts(), [1, 0, 0, 0, 0, 0]);
    assert_eq!(team.tm_ladder.counts(), [0, 1, 1, 1, 1, 1]);

    // 1-1: the match alone is under 2.5 but the running total is 3
    team.update_stats(side(1, 1, GameResult::Draw, Overtime::None), &lines);
    assert_eq!((team.tb_points, team.tm_points), (1, 1));
    assert_eq!((team.itb_points, team.itm_points), (1, 1));
    assert_eq!(team.tb_ladder.counts(), [2, 1, 1, 0, 0, 0]);
    assert_eq!(team.tm_ladder.counts(), [0, 1, 1, 2, 2, 2]);
    assert_eq!(team.itb_ladder.counts(), [2, 1, 0, 0, 0, 0]);
    assert_eq!(team.itm_ladder.counts(), [0, 1, 2, 2, 2, 2]);
}

#[test]
fn test_both_scored_uses_single_match() {
    let mut team = Team::new("Team A");
    team.update_stats(side(1, 1, GameResult::Draw, Overtime::None), &SportLines::SOCCER);
    team.update_stats(side(2, 0, GameResult::Win, Overtime::None), &SportLines::SOCCER);
    assert_eq!(team.oz_points, 1);
    assert_eq!(team.ozn_points, 1);
}

#[test]
fn test_goal_properties() {
    let mut team = Team::new("Team A");
    team.update_stats(side(2, 1, GameResult::Win, Overtime::None), &SportLines::SOCCER);
    team.update_stats(side(1, 2, GameResult::Loss, Overtime::None), &SportLines::SOCCER);

    assert_eq!(team.goal_difference(), 0);
    assert_eq!(team.goal_amount(), 6);
    assert_eq!(team.goal_ratio(), 1.0);
    assert_eq!(team.average_scoring(), 1.5);
    assert_eq!(team.average_throughput(), 1.5);
}

#[test]
fn test_goal_ratio_without_conceded() {
    let mut team = Team::new("Team A");
    assert_eq!(team.goal_ratio(), 0.0);
    assert_eq!(team.average_scoring(), 0.0);
    team.update_stats(side(4, 0, GameResult::Win, Overtime::None), &SportLines::SOCCER);
    assert_eq!(team.goal_ratio(), 4.0);
}

#[test]
fn test_set_filter_selects_from_log() {
    let mut team = Team::new("Team A");
    let mut away = side(0, 1, GameResult::Loss, Overtime::None);
    away.is_home = false;
    team.update_stats(side(2, 1, GameResult::Win, Overtime::None), &SportLines::SOCCER);
    team.update_stats(away, &SportLines::SOCCER);

    team.set_filter(|m| !m.is_home);
    assert_eq!(team.filtered_len(), 1);
    let picked: Vec<_> = team.filtered_matches().collect();
    assert_eq!(picked[0], &team.matches()[1]);

    team.set_filter(|_| false);
    assert!(!team.has_filtered_matches());
}
