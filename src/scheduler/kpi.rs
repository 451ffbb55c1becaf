//! Schedule quality metrics (KPIs).
//!
//! Computes summary indicators from a scheduled process list in
//! execution order.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(start - arrival) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first run - arrival); equals waiting under FCFS |
//! | Makespan | last completion - first start |
//! | Idle Time | sum of gaps between consecutive executions |
//! | CPU Utilization | total burst / makespan |
//! | Throughput | processes per tick over the makespan |
//!
//! Averages over zero processes are reported as `None` ("no data").
//! Totals are accumulated in `i128`: a sum of `n` turnaround times can
//! exceed the tick range even when every single completion fits.

use serde::{Deserialize, Serialize};

use crate::models::{Process, Tick};

/// Schedule performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of processes scheduled.
    pub process_count: usize,
    /// Sum of waiting times.
    pub total_waiting: i128,
    /// Sum of turnaround times.
    pub total_turnaround: i128,
    /// Sum of burst times (busy CPU time).
    pub total_burst: i128,
    /// Mean waiting time. `None` when there are no processes.
    pub avg_waiting: Option<f64>,
    /// Mean turnaround time. `None` when there are no processes.
    pub avg_turnaround: Option<f64>,
    /// Mean response time. `None` when there are no processes.
    pub avg_response: Option<f64>,
    /// Longest single wait (convoy indicator).
    pub max_waiting: Tick,
    /// Last completion minus first start.
    pub makespan: Tick,
    /// CPU idle time between the first start and the last completion.
    pub idle_time: Tick,
    /// Busy fraction of the makespan (0.0..=1.0). `None` for a zero makespan.
    pub cpu_utilization: Option<f64>,
    /// Completed processes per tick. `None` for a zero makespan.
    pub throughput: Option<f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from scheduled processes in execution order.
    pub fn calculate(processes: &[Process]) -> Self {
        let n = processes.len();
        let total = |field: fn(&Process) -> Tick| -> i128 {
            processes.iter().map(|p| i128::from(field(p))).sum()
        };
        let total_waiting = total(|p: &Process| p.waiting_time);
        let total_turnaround = total(|p: &Process| p.turnaround_time);
        let total_response = total(|p: &Process| p.response_time);
        let total_burst = total(|p: &Process| p.burst_time);
        let max_waiting = processes.iter().map(|p| p.waiting_time).max().unwrap_or(0);

        let first_start = processes.iter().map(|p| p.start_time).min();
        let last_completion = processes.iter().map(|p| p.completion_time).max();
        let makespan = match (first_start, last_completion) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        };

        let idle_time = processes
            .windows(2)
            .map(|w| (w[1].start_time - w[0].completion_time).max(0))
            .sum();

        let mean = |total: i128| {
            if n == 0 {
                None
            } else {
                Some(total as f64 / n as f64)
            }
        };

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                Some(total_burst as f64 / makespan as f64),
                Some(n as f64 / makespan as f64),
            )
        } else {
            (None, None)
        };

        Self {
            process_count: n,
            total_waiting,
            total_turnaround,
            total_burst,
            avg_waiting: mean(total_waiting),
            avg_turnaround: mean(total_turnaround),
            avg_response: mean(total_response),
            max_waiting,
            makespan,
            idle_time,
            cpu_utilization,
            throughput,
        }
    }

    /// Whether any processes were measured.
    pub fn has_data(&self) -> bool {
        self.process_count > 0
    }
}
