//! FCFS scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `FcfsScheduler` runs processes in arrival order without preemption,
//! tracking a running clock that jumps forward over idle gaps.
//!
//! # KPI
//!
//! `ScheduleKpi` computes average waiting, turnaround and response times,
//! makespan, idle time, utilization and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod fcfs;
mod kpi;

pub use fcfs::{schedule, FcfsScheduler};
pub use kpi::ScheduleKpi;
