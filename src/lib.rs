//! First-Come-First-Served CPU scheduling simulator.
//!
//! Computes FCFS timing metrics for a static list of processes and renders
//! them as tables, Gantt charts and histograms.
//!
//! # Modules
//!
//! - **`models`**: `Process` record with input and derived timing fields
//! - **`validation`**: Input integrity checks (arrival, burst, duplicate PIDs)
//! - **`scheduler`**: The FCFS core and schedule KPIs
//! - **`generator`**: Random, predefined and parsed process sets
//! - **`report`**: Text table, Gantt chart and histogram renderers
//! - **`sim`**: Batch simulation over many random sets
//! - **`menu`**: Interactive driver with explicit session state
//! - **`config`**: JSON configuration
//!
//! # Example
//!
//! ```
//! use fcfs_sim::models::Process;
//! use fcfs_sim::scheduler::{schedule, ScheduleKpi};
//!
//! let out = schedule(vec![
//!     Process::new(1, 0, 2),
//!     Process::new(2, 10, 5),
//! ]).unwrap();
//! assert_eq!(out[1].start_time, 10); // CPU idles until P2 arrives
//!
//! let kpi = ScheduleKpi::calculate(&out);
//! assert_eq!(kpi.avg_waiting, Some(0.0));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod menu;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod sim;
pub mod validation;
