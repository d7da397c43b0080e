//! Where tournaments come from and where their results go

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

use crate::error::Result;
use crate::pipeline::{TournamentInput, TournamentOutput};

/// Supplies the tournaments to process
pub trait MatchSource {
    fn tournaments(&self) -> Result<Vec<TournamentInput>>;
}

/// Receives finished tournaments. Shared between worker threads.
pub trait StandingsSink: Send + Sync {
    fn save(&self, output: &TournamentOutput) -> Result<()>;
}

/// A JSON document holding a list of tournaments
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MatchSource for JsonFileSource {
    fn tournaments(&self) -> Result<Vec<TournamentInput>> {
        let contents = std::fs::read_to_string(&self.path)?;
        let tournaments: Vec<TournamentInput> = serde_json::from_str(&contents)?;
        info!(
            path = %self.path.display(),
            tournaments = tournaments.len(),
            "Loaded tournaments"
        );
        Ok(tournaments)
    }
}

/// Writes one pretty-printed JSON file per tournament into a directory
#[derive(Debug, Clone)]
pub struct JsonDirSink {
    dir: PathBuf,
}

impl JsonDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File a tournament's output is written to
    pub fn path_for(&self, tournament_id: i64) -> PathBuf {
        self.dir.join(format!("tournament_{}.json", tournament_id))
    }

    /// Read back a previously saved tournament
    pub fn load(&self, tournament_id: i64) -> Result<TournamentOutput> {
        let contents = std::fs::read_to_string(self.path_for(tournament_id))?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl StandingsSink for JsonDirSink {
    fn save(&self, output: &TournamentOutput) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(output.tournament_id);
        let json = serde_json::to_string_pretty(output)?;
        std::fs::write(&path, json)?;
        debug!(path = %path.display(), "Saved tournament");
        Ok(())
    }
}

/// Keeps outputs in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    outputs: Mutex<Vec<TournamentOutput>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved outputs, ordered by tournament id
    pub fn outputs(&self) -> Vec<TournamentOutput> {
        let mut outputs = self
            .outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        outputs.sort_by_key(|o| o.tournament_id);
        outputs
    }

    pub fn len(&self) -> usize {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StandingsSink for MemorySink {
    fn save(&self, output: &TournamentOutput) -> Result<()> {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(output.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod io_tests;
