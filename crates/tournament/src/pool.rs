//! Fixed-size worker pool that processes whole tournaments.
//!
//! Workers pull from one shared queue. Every task builds its own registry, so
//! nothing is shared between threads except the sink. A failing or panicking
//! task is logged and counted; the other tasks carry on.

use crossbeam::channel::{self, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

use crate::config::TournamentConfig;
use crate::error::{Result, TournamentError};
use crate::io::StandingsSink;
use crate::pipeline::{process_tournament, TournamentInput};

/// One tournament to compute and store
pub struct TournamentTask {
    input: TournamentInput,
    config: Arc<TournamentConfig>,
    sink: Arc<dyn StandingsSink>,
}

impl TournamentTask {
    pub fn new(input: TournamentInput, config: Arc<TournamentConfig>, sink: Arc<dyn StandingsSink>) -> Self {
        Self { input, config, sink }
    }

    pub fn tournament_id(&self) -> i64 {
        self.input.tournament_id
    }

    /// Compute the tournament and hand the output to the sink
    pub fn run(&self) -> Result<()> {
        let output = process_tournament(&self.input, &self.config)?;
        self.sink.save(&output)
    }
}

/// Outcome counts after [`WorkerPool::join`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolReport {
    pub completed: usize,
    pub failed: usize,
}

impl PoolReport {
    pub fn total(&self) -> usize {
        self.completed + self.failed
    }
}

enum Message {
    Task(Box<TournamentTask>),
    Shutdown,
}

/// Count of submitted tasks not finished yet
#[derive(Default)]
struct Pending {
    count: Mutex<usize>,
    drained: Condvar,
}

impl Pending {
    fn add(&self) {
        *self.count.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }

    fn done(&self) {
        let mut count = self.count.lock().unwrap_or_else(PoisonError::into_inner);
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.drained.notify_all();
        }
    }

    fn wait(&self) {
        let mut count = self.count.lock().unwrap_or_else(PoisonError::into_inner);
        while *count > 0 {
            count = self
                .drained
                .wait(count)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

#[derive(Default)]
struct Counters {
    completed: AtomicUsize,
    failed: AtomicUsize,
}

pub struct WorkerPool {
    sender: Sender<Message>,
    workers: Vec<JoinHandle<()>>,
    pending: Arc<Pending>,
    counters: Arc<Counters>,
}

impl WorkerPool {
    /// Start `size` workers (at least one)
    pub fn new(size: usize) -> Result<Self> {
        let size = size.max(1);
        let (sender, receiver) = channel::unbounded();
        let pending = Arc::new(Pending::default());
        let counters = Arc::new(Counters::default());

        let mut workers = Vec::with_capacity(size);
        for index in 0..size {
            let name = format!("standings-worker-{}", index);
            let receiver = receiver.clone();
            let pending = Arc::clone(&pending);
            let counters = Arc::clone(&counters);
            let handle = thread::Builder::new()
                .name(name.clone())
                .spawn(move || worker_loop(&name, receiver, &pending, &counters))?;
            workers.push(handle);
        }

        info!(workers = size, "Worker pool started");
        Ok(Self {
            sender,
            workers,
            pending,
            counters,
        })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Queue a task
    pub fn submit(&self, task: TournamentTask) -> Result<()> {
        self.pending.add();
        if self.sender.send(Message::Task(Box::new(task))).is_err() {
            self.pending.done();
            return Err(TournamentError::PoolClosed);
        }
        Ok(())
    }

    /// Wait until every queued task has finished, then stop the workers
    pub fn join(self) -> PoolReport {
        self.pending.wait();

        for _ in &self.workers {
            // Only fails if every worker is already gone
            let _ = self.sender.send(Message::Shutdown);
        }
        for handle in self.workers {
            if handle.join().is_err() {
                error!("Worker thread exited abnormally");
            }
        }

        let report = PoolReport {
            completed: self.counters.completed.load(Ordering::SeqCst),
            failed: self.counters.failed.load(Ordering::SeqCst),
        };
        info!(
            completed = report.completed,
            failed = report.failed,
            "Worker pool finished"
        );
        report
    }
}

fn worker_loop(name: &str, receiver: Receiver<Message>, pending: &Pending, counters: &Counters) {
    loop {
        match receiver.recv() {
            Ok(Message::Task(task)) => {
                let tournament_id = task.tournament_id();
                info!(worker = name, tournament_id, "Processing tournament");

                match panic::catch_unwind(AssertUnwindSafe(|| task.run())) {
                    Ok(Ok(())) => {
                        counters.completed.fetch_add(1, Ordering::SeqCst);
                    }
                    Ok(Err(e)) => {
                        error!(worker = name, tournament_id, "Tournament failed: {}", e);
                        counters.failed.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(payload) => {
                        error!(
                            worker = name,
                            tournament_id,
                            "Tournament panicked: {}",
                            panic_message(payload.as_ref())
                        );
                        counters.failed.fetch_add(1, Ordering::SeqCst);
                    }
                }
                pending.done();
            }
            Ok(Message::Shutdown) | Err(_) => {
                debug!(worker = name, "Worker stopped");
                break;
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod pool_tests;
