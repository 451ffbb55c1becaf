//! Batch simulation over independently generated process sets.
//!
//! # Algorithm
//!
//! For run `i` in `0..runs`:
//! 1. Seed a fresh RNG with `seed + i` (runs are independent and reproducible).
//! 2. Generate a process set, schedule it, compute its KPIs.
//!
//! The summary averages the per-run average waiting and turnaround times.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ScheduleError};
use crate::generator::{GeneratorConfig, ProcessGenerator};
use crate::scheduler::{FcfsScheduler, ScheduleKpi};

/// Batch simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of independent runs.
    pub runs: usize,
    /// Base RNG seed; run `i` uses `seed + i`.
    pub seed: u64,
    /// Process set generation ranges.
    pub generator: GeneratorConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: 0,
            generator: GeneratorConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Sets the number of runs.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the generator ranges.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }
}

/// Errors from a batch simulation.
#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("run {run}: {source}")]
    Schedule {
        run: usize,
        #[source]
        source: ScheduleError,
    },
}

/// Outcome of a single batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Zero-based run index.
    pub run: usize,
    /// Seed used for this run.
    pub seed: u64,
    /// KPIs of the scheduled set.
    pub kpi: ScheduleKpi,
}

/// Aggregated batch metrics.
///
/// Averages are `None` when no run produced data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Per-run results in run order.
    pub runs: Vec<RunResult>,
    /// Mean of per-run average waiting times.
    pub mean_avg_waiting: Option<f64>,
    /// Mean of per-run average turnaround times.
    pub mean_avg_turnaround: Option<f64>,
    /// Lowest per-run average waiting time.
    pub min_avg_waiting: Option<f64>,
    /// Highest per-run average waiting time.
    pub max_avg_waiting: Option<f64>,
    /// Mean CPU utilization across runs.
    pub mean_utilization: Option<f64>,
}

impl BatchSummary {
    /// Aggregates per-run results.
    pub fn from_runs(runs: Vec<RunResult>) -> Self {
        let waits: Vec<f64> = runs.iter().filter_map(|r| r.kpi.avg_waiting).collect();
        let tats: Vec<f64> = runs.iter().filter_map(|r| r.kpi.avg_turnaround).collect();
        let utils: Vec<f64> = runs.iter().filter_map(|r| r.kpi.cpu_utilization).collect();

        Self {
            mean_avg_waiting: mean(&waits),
            mean_avg_turnaround: mean(&tats),
            min_avg_waiting: waits.iter().copied().reduce(f64::min),
            max_avg_waiting: waits.iter().copied().reduce(f64::max),
            mean_utilization: mean(&utils),
            runs,
        }
    }

    /// Number of runs performed.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Runs a batch simulation.
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary, BatchError> {
    config.generator.validate()?;
    let scheduler = FcfsScheduler::new();

    let mut results = Vec::with_capacity(config.runs);
    for run in 0..config.runs {
        let seed = config.seed.wrapping_add(run as u64);
        let processes = ProcessGenerator::seeded(config.generator.clone(), seed)?.generate();
        let scheduled = scheduler
            .schedule(processes)
            .map_err(|source| BatchError::Schedule { run, source })?;
        let kpi = ScheduleKpi::calculate(&scheduled);
        debug!(run, seed, avg_waiting = ?kpi.avg_waiting, "batch run complete");
        results.push(RunResult { run, seed, kpi });
    }

    let summary = BatchSummary::from_runs(results);
    info!(
        runs = summary.run_count(),
        mean_avg_waiting = ?summary.mean_avg_waiting,
        mean_avg_turnaround = ?summary.mean_avg_turnaround,
        "batch simulation complete"
    );
    Ok(summary)
}
