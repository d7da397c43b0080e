use super::*;
use standings_core::SportLines;

#[test]
fn test_default_config() {
    let config = TournamentConfig::default();
    assert!(config.workers >= 1);
    assert_eq!(config.ratings, RatingKind::ALL.to_vec());
    assert_eq!(config.thresholds.lines_for("Soccer").unwrap(), SportLines::SOCCER);
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
        workers = 3
        ratings = ["elo", "power"]

        [sports."Handball"]
        total_line = 55.5
        individual_line = 27.5

        [sports."Soccer"]
        total_line = 3.5
        individual_line = 1.5
    "#;
    let config = TournamentConfig::from_toml_str(toml).unwrap();

    assert_eq!(config.workers, 3);
    assert_eq!(config.ratings, vec![RatingKind::Elo, RatingKind::Power]);
    assert_eq!(config.thresholds.lines_for("Handball").unwrap().total_line, 55.5);
    assert_eq!(config.thresholds.lines_for("Soccer").unwrap().total_line, 3.5);
    // Built-in sports not named in the file survive
    assert_eq!(
        config.thresholds.lines_for("Ice Hockey").unwrap(),
        SportLines::ICE_HOCKEY
    );
}

#[test]
fn test_empty_document_is_default() {
    let config = TournamentConfig::from_toml_str("").unwrap();
    assert_eq!(config, TournamentConfig::default());
}

#[test]
fn test_zero_workers_rejected() {
    let err = TournamentConfig::from_toml_str("workers = 0").unwrap_err();
    assert!(matches!(err, TournamentError::InvalidConfig(_)));

    let err = TournamentConfig::default().with_workers(0).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidConfig(_)));
}

#[test]
fn test_unknown_rating_rejected() {
    let err = TournamentConfig::from_toml_str(r#"ratings = ["glicko"]"#).unwrap_err();
    assert!(matches!(err, TournamentError::ConfigParse(_)));
}

#[test]
fn test_negative_line_rejected() {
    let toml = r#"
        [sports."Soccer"]
        total_line = -1.0
        individual_line = 1.5
    "#;
    let err = TournamentConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, TournamentError::Standings(_)));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TournamentConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TournamentConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(&path, "workers = 2\n").unwrap();

    let config = TournamentConfig::load_or_default(&path).unwrap();
    assert_eq!(config.workers, 2);
}
