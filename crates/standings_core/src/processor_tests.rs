use super::*;
use chrono::NaiveDate;

fn report(home_goals: u32, away_goals: u32, overtime: Overtime) -> MatchReport {
    MatchReport {
        match_id: 7,
        sport_id: 1,
        country_id: 1,
        tournament_id: 1,
        date: NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        home_team: "Home".into(),
        away_team: "Away".into(),
        home_goals,
        away_goals,
        overtime,
        season_id: 1,
        stage_id: 1,
    }
}

#[test]
fn test_regulation_results() {
    assert_eq!(
        derive_results(2, 0, &Overtime::None),
        (GameResult::Win, GameResult::Loss)
    );
    assert_eq!(
        derive_results(0, 1, &Overtime::None),
        (GameResult::Loss, GameResult::Win)
    );
    assert_eq!(
        derive_results(1, 1, &Overtime::None),
        (GameResult::Draw, GameResult::Draw)
    );
}

#[test]
fn test_overtime_is_booked_as_draw() {
    assert_eq!(
        derive_results(3, 2, &Overtime::Overtime),
        (GameResult::Draw, GameResult::Draw)
    );
    assert_eq!(
        derive_results(1, 2, &Overtime::Penalties),
        (GameResult::Draw, GameResult::Draw)
    );
}

#[test]
fn test_play_updates_both_sides() {
    let mut teams = vec![Team::new("Home"), Team::new("Away")];
    play(&mut teams, 0, 1, &report(2, 1, Overtime::None), &SportLines::SOCCER);

    let (home, away) = (&teams[0], &teams[1]);
    assert_eq!(home.points, 3);
    assert_eq!(away.points, 0);
    assert_eq!(home.matches()[0].opponent, 1);
    assert_eq!(away.matches()[0].opponent, 0);
    assert!(home.matches()[0].is_home);
    assert!(!away.matches()[0].is_home);
    assert_eq!(away.matches()[0].goals_for, 1);
    assert_eq!(away.matches()[0].result, GameResult::Loss);
}

#[test]
fn test_overtime_match_awards_no_points() {
    let mut teams = vec![Team::new("Home"), Team::new("Away")];
    play(&mut teams, 0, 1, &report(4, 3, Overtime::Overtime), &SportLines::ICE_HOCKEY);

    assert_eq!(teams[0].games_draws, 1);
    assert_eq!(teams[1].games_draws, 1);
    assert_eq!(teams[0].points, 0);
    assert_eq!(teams[1].points, 0);
    assert_eq!(teams[0].overtime_wins, 0);
}

#[test]
fn test_report_overtime_from_json() {
    let json = r#"{
        "match_id": 1, "sport_id": 4, "country_id": 2, "tournament_id": 3,
        "date": "2024-02-10T19:30:00",
        "home_team": "A", "away_team": "B",
        "home_goals": 3, "away_goals": 2, "overtime": "ot",
        "season_id": 1, "stage_id": 1
    }"#;
    let parsed: MatchReport = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.overtime, Overtime::Overtime);

    let without = json.replace(r#""overtime": "ot","#, "");
    let parsed: MatchReport = serde_json::from_str(&without).unwrap();
    assert_eq!(parsed.overtime, Overtime::None);
}
