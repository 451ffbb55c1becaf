//! Process (scheduling unit) model.
//!
//! A process is one unit of CPU work with a known arrival time and an
//! uninterruptible burst. The derived timing fields are filled in by
//! the FCFS scheduler and are read-only afterwards.

use serde::{Deserialize, Serialize};

/// Simulation time unit (ticks). The consumer defines what one tick means.
pub type Tick = i64;

/// A process to be scheduled.
///
/// Input attributes (`arrival_time`, `burst_time`) are set at construction.
/// Derived attributes start at the sentinel `0` and are written exactly once
/// per scheduling run.
///
/// # Time Representation
/// All times are in ticks relative to a simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier. Unique within one run (caller's responsibility).
    pub pid: u32,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: Tick,
    /// CPU time required, run without preemption.
    pub burst_time: Tick,
    /// Time at which the process starts executing.
    #[serde(default)]
    pub start_time: Tick,
    /// Time from arrival to first execution.
    #[serde(default)]
    pub response_time: Tick,
    /// Time spent eligible but not running.
    #[serde(default)]
    pub waiting_time: Tick,
    /// Time at which the process finishes.
    #[serde(default)]
    pub completion_time: Tick,
    /// Time from arrival to completion.
    #[serde(default)]
    pub turnaround_time: Tick,
}

impl Process {
    /// Creates a process with only its input attributes populated.
    pub fn new(pid: u32, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            start_time: 0,
            response_time: 0,
            waiting_time: 0,
            completion_time: 0,
            turnaround_time: 0,
        }
    }

    /// Execution interval `[start_time, start_time + burst_time)`.
    #[inline]
    pub fn interval(&self) -> (Tick, Tick) {
        (self.start_time, self.start_time + self.burst_time)
    }

    /// Display label, e.g. `P3`.
    pub fn label(&self) -> String {
        format!("P{}", self.pid)
    }
}
