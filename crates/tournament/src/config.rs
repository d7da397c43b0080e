//! Runner configuration, loaded from `tournament.toml`

use serde::{Deserialize, Serialize};
use standings_core::{RatingKind, SportThresholds};
use std::path::Path;
use tracing::info;

use crate::error::{Result, TournamentError};

/// Default config file name looked up by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "tournament.toml";

/// Runner configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentConfig {
    /// Number of worker threads in the pool
    pub workers: usize,
    /// Rating strategies to run after every filter, in order
    pub ratings: Vec<RatingKind>,
    /// Lines per sport; file entries are merged over the built-in sports
    pub thresholds: SportThresholds,
}

/// Top-level keys of the config file other than `[sports]`
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    workers: Option<usize>,
    ratings: Option<Vec<RatingKind>>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            ratings: RatingKind::ALL.to_vec(),
            thresholds: SportThresholds::default(),
        }
    }
}

impl TournamentConfig {
    /// Parse a config document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut config = Self::default();

        if let Some(workers) = file.workers {
            config.workers = workers;
        }
        if let Some(ratings) = file.ratings {
            config.ratings = ratings;
        }
        config
            .thresholds
            .merge(SportThresholds::from_toml_str(contents)?);

        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            info!(path = %path.display(), "Loading config");
            Self::load(path)
        } else {
            info!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Override the worker count
    pub fn with_workers(mut self, workers: usize) -> Result<Self> {
        self.workers = workers;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(TournamentError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
