//! Scheduling domain models.
//!
//! Provides the data type scheduled by the FCFS core and consumed by
//! reporting, generation and batch simulation.
//!
//! # Field Lifecycle
//!
//! | Field | Set by | Mutability |
//! |-------|--------|------------|
//! | pid, arrival_time, burst_time | Caller / generator | Fixed once scheduling begins |
//! | start, response, waiting, completion, turnaround | Scheduler | Written once per run |

mod process;

pub use process::{Process, Tick};
