//! Tournament CLI
//!
//! Compute standings and ratings for every tournament in a fixtures file.

use anyhow::{anyhow, bail, Context};
use standings_core::TableFilter;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tournament::{
    generate_table, process_tournament, JsonDirSink, JsonFileSource, MatchSource, StandingsSink,
    TournamentConfig, TournamentTask, WorkerPool, DEFAULT_CONFIG_FILE,
};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Tournament Standings Runner");
    println!();
    println!("Usage:");
    println!("  tournament run <input.json> [--out DIR] [--config FILE] [--workers N] [--log-level L]");
    println!("  tournament standings <input.json> [--tournament ID] [--filter NAME] [--config FILE]");
    println!("  tournament help");
    println!();
    println!("Filters:");
    println!("  general, home, away, strong, medium, weak,");
    println!("  home_strong, home_medium, home_weak, away_strong, away_medium, away_weak");
    println!();
    println!("Examples:");
    println!("  tournament run fixtures.json --out standings_out --workers 4");
    println!("  tournament standings fixtures.json --tournament 785 --filter home");
}

/// Flags shared by the subcommands
struct Options {
    input: PathBuf,
    out: PathBuf,
    config: PathBuf,
    workers: Option<usize>,
    log_level: Option<String>,
    tournament: Option<i64>,
    filter: TableFilter,
}

fn parse_options(args: &[String]) -> anyhow::Result<Options> {
    let input = args
        .first()
        .filter(|a| !a.starts_with("--"))
        .ok_or_else(|| anyhow!("missing input file"))?;

    let mut options = Options {
        input: PathBuf::from(input),
        out: PathBuf::from("standings_out"),
        config: PathBuf::from(DEFAULT_CONFIG_FILE),
        workers: None,
        log_level: None,
        tournament: None,
        filter: TableFilter::GENERAL,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .ok_or_else(|| anyhow!("{} needs a value", flag));
        match flag {
            "--out" | "-o" => options.out = PathBuf::from(value?),
            "--config" | "-c" => options.config = PathBuf::from(value?),
            "--workers" | "-w" => {
                options.workers = Some(value?.parse().context("--workers expects a number")?)
            }
            "--log-level" => options.log_level = Some(value?.clone()),
            "--tournament" | "-t" => {
                options.tournament = Some(value?.parse().context("--tournament expects an id")?)
            }
            "--filter" | "-f" => {
                options.filter = value?
                    .parse::<TableFilter>()
                    .map_err(|e| anyhow!(e))?
            }
            _ => bail!("unknown option: {}", flag),
        }
        i += 2;
    }

    Ok(options)
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(options: &Options) -> anyhow::Result<TournamentConfig> {
    let config = TournamentConfig::load_or_default(&options.config)
        .with_context(|| format!("loading {}", options.config.display()))?;
    match options.workers {
        Some(workers) => Ok(config.with_workers(workers)?),
        None => Ok(config),
    }
}

fn run_all(options: &Options) -> anyhow::Result<()> {
    let config = Arc::new(load_config(options)?);
    let tournaments = JsonFileSource::new(&options.input)
        .tournaments()
        .with_context(|| format!("reading {}", options.input.display()))?;

    println!("=== Processing {} tournaments ===", tournaments.len());
    println!("Workers: {}, Output: {}", config.workers, options.out.display());
    println!();

    let sink: Arc<dyn StandingsSink> = Arc::new(JsonDirSink::new(&options.out));
    let pool = WorkerPool::new(config.workers)?;
    for input in tournaments {
        pool.submit(TournamentTask::new(input, Arc::clone(&config), Arc::clone(&sink)))?;
    }
    let report = pool.join();

    println!("=== Done ===");
    println!("Completed: {}, Failed: {}", report.completed, report.failed);

    if report.failed > 0 {
        bail!("{} of {} tournaments failed", report.failed, report.total());
    }
    Ok(())
}

fn show_standings(options: &Options) -> anyhow::Result<()> {
    let config = load_config(options)?;
    let tournaments = JsonFileSource::new(&options.input)
        .tournaments()
        .with_context(|| format!("reading {}", options.input.display()))?;

    let input = match options.tournament {
        Some(id) => tournaments
            .iter()
            .find(|t| t.tournament_id == id)
            .ok_or_else(|| anyhow!("tournament {} not found", id))?,
        None => tournaments
            .first()
            .ok_or_else(|| anyhow!("no tournaments in {}", options.input.display()))?,
    };

    let output = process_tournament(input, &config)?;
    let view = options.filter.name();
    match output.final_standings.get(view) {
        Some(standings) => {
            let title = format!("Tournament {} ({}): {}", input.tournament_id, input.sport, view);
            println!("{}", generate_table(&title, standings));
        }
        None => println!("No finished matches in tournament {}", input.tournament_id),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "run" => {
            let options = parse_options(&args[2..])?;
            init_logging(options.log_level.as_deref());
            run_all(&options)
        }
        "standings" | "table" => {
            let options = parse_options(&args[2..])?;
            init_logging(options.log_level.as_deref().or(Some("warn")));
            show_standings(&options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    }
}
