//! End-to-end run: JSON fixtures in, one JSON output per tournament out
//!
//! Mirrors what `tournament run` does, minus argument parsing.

use std::sync::Arc;
use tournament::{
    JsonDirSink, JsonFileSource, MatchSource, StandingsSink, TournamentConfig, TournamentTask,
    WorkerPool,
};

const FIXTURES: &str = r#"[
    {
        "tournament_id": 17,
        "sport": "Soccer",
        "teams": ["Lions", "Tigers", "Bears"],
        "matches": [
            {"match_id": 1, "date": "2024-09-01T16:00:00", "home_team": "Lions",
             "away_team": "Tigers", "home_goals": 1, "away_goals": 0},
            {"match_id": 2, "date": "2024-09-08T16:00:00", "home_team": "Tigers",
             "away_team": "Bears", "home_goals": 1, "away_goals": 0},
            {"match_id": 3, "date": "2024-09-15T16:00:00", "home_team": "Bears",
             "away_team": "Lions", "home_goals": 1, "away_goals": 0},
            {"match_id": 4, "date": "2024-09-22T16:00:00", "home_team": "Lions",
             "away_team": "Bears", "home_goals": null, "away_goals": null}
        ]
    },
    {
        "tournament_id": 18,
        "sport": "Ice Hockey",
        "teams": ["Sharks", "Jets"],
        "matches": [
            {"match_id": 5, "date": "2024-10-01T19:30:00", "home_team": "Sharks",
             "away_team": "Jets", "home_goals": 4, "away_goals": 3, "overtime": "ap"}
        ]
    },
    {
        "tournament_id": 19,
        "sport": "Bandy",
        "teams": ["Ural", "Volga"],
        "matches": []
    }
]"#;

#[test]
fn test_run_writes_one_file_per_good_tournament() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fixtures.json");
    std::fs::write(&input, FIXTURES).unwrap();

    let config = Arc::new(TournamentConfig::default().with_workers(2).unwrap());
    let sink = Arc::new(JsonDirSink::new(dir.path().join("out")));
    let shared: Arc<dyn StandingsSink> = sink.clone();

    let tournaments = JsonFileSource::new(&input).tournaments().unwrap();
    let pool = WorkerPool::new(config.workers).unwrap();
    for tournament in tournaments {
        pool.submit(TournamentTask::new(tournament, config.clone(), shared.clone()))
            .unwrap();
    }
    let report = pool.join();

    // Bandy has no configured lines
    assert_eq!(report.completed, 2);
    assert_eq!(report.failed, 1);
    assert!(!sink.path_for(19).exists());

    let cycle = sink.load(17).unwrap();
    assert_eq!(cycle.snapshots.len(), 8);
    let general = &cycle.final_standings["general"];
    for team in ["Lions", "Tigers", "Bears"] {
        assert_eq!(general[team].games_played, 2);
        assert_eq!(general[team].points, 3);
    }
    // The unplayed fixture carries the standings after match 3
    assert_eq!(cycle.snapshots["4_Bears"].views["general"].points, 3);

    let hockey = sink.load(18).unwrap();
    let sharks = &hockey.final_standings["general"]["Sharks"];
    assert_eq!(sharks.games_draws, 1);
    assert_eq!(sharks.overtime_wins, 1);
    assert_eq!(hockey.final_standings["general"]["Jets"].overtime_losses, 1);
}
