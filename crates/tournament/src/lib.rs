//! Tournament runner for the standings engine
//!
//! This crate provides infrastructure for:
//! - Reading tournaments (teams plus fixtures) from JSON
//! - Replaying each tournament through every table view after each match
//! - Processing many tournaments in parallel on a worker pool
//! - Writing per-match team snapshots and final standings
//!
//! # Usage
//!
//! ```bash
//! # Compute every tournament in a file, one JSON output per tournament
//! cargo run -p tournament -- run fixtures.json --out standings_out
//!
//! # Print one table
//! cargo run -p tournament -- standings fixtures.json --filter home_strong
//! ```

mod config;
mod error;
mod io;
mod pipeline;
mod pool;
mod report;

pub use config::*;
pub use error::*;
pub use io::*;
pub use pipeline::*;
pub use pool::*;
pub use report::*;
