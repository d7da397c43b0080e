//! Error types for the standings engine

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Numerical trouble inside the ratings (singular DIF system, zero VO scale)
/// is recovered locally and never shows up here.
#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("Unknown sport: {0}")]
    UnknownSport(String),

    #[error("Invalid threshold for {sport}: {reason}")]
    InvalidThreshold { sport: String, reason: String },

    #[error("Failed to read thresholds: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse thresholds: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StandingsError>;
