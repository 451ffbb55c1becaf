//! Text reports for scheduled process sets.
//!
//! - **`render_table`**: per-process timings plus averages
//! - **`render_gantt`**: execution intervals on a shared time axis
//! - **`waiting_histogram`** / **`turnaround_histogram`**: per-process bars
//! - **`render_report`**: all of the above plus summary KPIs
//! - **`render_batch_summary`**: aggregated batch simulation metrics
//!
//! Renderers return `String`s; the caller decides where output goes.

mod gantt;
mod histogram;
mod table;

pub use gantt::render_gantt;
pub use histogram::{render_histogram, turnaround_histogram, waiting_histogram};
pub use table::{format_avg, render_averages, render_table};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Process;
use crate::scheduler::ScheduleKpi;
use crate::sim::BatchSummary;

/// Chart rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Columns available to the longest bar.
    pub chart_width: usize,
    /// Character used to draw bars.
    pub bar_char: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            chart_width: 50,
            bar_char: '#',
        }
    }
}

impl RenderConfig {
    /// Smallest usable chart width.
    pub const MIN_WIDTH: usize = 10;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart_width < Self::MIN_WIDTH {
            return Err(ConfigError::invalid(
                "chart_width",
                format!("must be at least {}", Self::MIN_WIDTH),
            ));
        }
        if self.bar_char.is_whitespace() || self.bar_char.is_control() {
            return Err(ConfigError::invalid("bar_char", "must be a visible character"));
        }
        Ok(())
    }
}

/// Renders the complete report for one scheduled set.
pub fn render_report(processes: &[Process], config: &RenderConfig) -> String {
    let kpi = ScheduleKpi::calculate(processes);
    let mut out = String::new();

    out.push_str("FCFS Scheduling Results\n\n");
    out.push_str(&render_table(processes));
    out.push('\n');
    out.push_str(&render_summary(&kpi));
    out.push_str("\nGantt Chart\n");
    out.push_str(&render_gantt(processes, config));
    out.push('\n');
    out.push_str(&waiting_histogram(processes, config));
    out.push('\n');
    out.push_str(&turnaround_histogram(processes, config));
    out
}

/// Renders makespan, idle time, utilization and throughput.
pub fn render_summary(kpi: &ScheduleKpi) -> String {
    if !kpi.has_data() {
        return "Makespan: no data\nIdle Time: no data\nCPU Utilization: no data\nThroughput: no data\n"
            .to_string();
    }
    let pct = |v: Option<f64>| match v {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "no data".to_string(),
    };
    let rate = |v: Option<f64>| match v {
        Some(v) => format!("{v:.3} processes/tick"),
        None => "no data".to_string(),
    };
    format!(
        "Makespan: {}\nIdle Time: {}\nCPU Utilization: {}\nThroughput: {}\n",
        kpi.makespan,
        kpi.idle_time,
        pct(kpi.cpu_utilization),
        rate(kpi.throughput)
    )
}

/// Renders aggregated batch metrics.
pub fn render_batch_summary(summary: &BatchSummary) -> String {
    format!(
        "Batch Simulation ({} runs)\n\
         Mean Average Waiting Time: {}\n\
         Mean Average Turnaround Time: {}\n\
         Average Waiting Time Range: {} .. {}\n\
         Mean CPU Utilization: {}\n",
        summary.run_count(),
        format_avg(summary.mean_avg_waiting),
        format_avg(summary.mean_avg_turnaround),
        format_avg(summary.min_avg_waiting),
        format_avg(summary.max_avg_waiting),
        match summary.mean_utilization {
            Some(u) => format!("{:.1}%", u * 100.0),
            None => "no data".to_string(),
        }
    )
}
