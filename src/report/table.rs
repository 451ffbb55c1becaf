//! Tabular process report.

use crate::models::Process;
use crate::scheduler::ScheduleKpi;

const HEADERS: [&str; 7] = [
    "PID",
    "Arrival",
    "Burst",
    "Start",
    "Waiting",
    "Completion",
    "Turnaround",
];

/// Renders scheduled processes as an aligned table followed by averages.
///
/// Rows appear in the order given (execution order for scheduler output).
pub fn render_table(processes: &[Process]) -> String {
    let rows: Vec<[String; 7]> = processes
        .iter()
        .map(|p| {
            [
                p.pid.to_string(),
                p.arrival_time.to_string(),
                p.burst_time.to_string(),
                p.start_time.to_string(),
                p.waiting_time.to_string(),
                p.completion_time.to_string(),
                p.turnaround_time.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &rows {
        write_row(&mut out, row, &widths);
    }

    out.push('\n');
    out.push_str(&render_averages(&ScheduleKpi::calculate(processes)));
    out
}

/// Renders the average waiting and turnaround lines.
pub fn render_averages(kpi: &ScheduleKpi) -> String {
    format!(
        "Average Waiting Time: {}\nAverage Turnaround Time: {}\n",
        format_avg(kpi.avg_waiting),
        format_avg(kpi.avg_turnaround)
    )
}

/// Formats an optional average, `no data` when absent.
pub fn format_avg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "no data".to_string(),
    }
}

fn write_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &w)| format!("{cell:>w$}"))
        .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
}
