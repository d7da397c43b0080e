//! Error types for the tournament runner

use standings_core::StandingsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("Standings error: {0}")]
    Standings(#[from] StandingsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Worker pool is shut down")]
    PoolClosed,
}

pub type Result<T> = std::result::Result<T, TournamentError>;
