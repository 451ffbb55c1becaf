//! Batch simulation.
//!
//! Repeats generate → schedule → measure over many independent process
//! sets and aggregates the per-run averages.

mod batch;

pub use batch::{run_batch, BatchConfig, BatchError, BatchSummary, RunResult};
