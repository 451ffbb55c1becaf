//! Text Gantt chart.
//!
//! Draws one row per process, in the order given, with a bar covering
//! `[start_time, start_time + burst_time)` on a shared axis starting at t=0.
//! Idle CPU time shows as blank columns.

use crate::models::{Process, Tick};

use super::RenderConfig;

/// Renders a Gantt chart for scheduled processes.
///
/// Pass the scheduler's output unchanged: rows follow execution order.
pub fn render_gantt(processes: &[Process], config: &RenderConfig) -> String {
    let horizon = processes
        .iter()
        .map(|p| p.interval().1)
        .max()
        .unwrap_or(0);
    if processes.is_empty() || horizon <= 0 {
        return "(no processes)\n".to_string();
    }

    let width = config.chart_width;
    let labels: Vec<String> = processes.iter().map(Process::label).collect();
    let label_w = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (p, label) in processes.iter().zip(&labels) {
        let (start, end) = p.interval();
        let from = column(start, horizon, width);
        let to = column(end, horizon, width).max(from + 1).min(width);

        let mut bar = String::with_capacity(width);
        bar.push_str(&" ".repeat(from));
        bar.extend(std::iter::repeat(config.bar_char).take(to.saturating_sub(from)));
        bar.push_str(&" ".repeat(width - to.max(from)));

        out.push_str(&format!("{label:<label_w$} |{bar}| {start}-{end}\n"));
    }

    // Axis: 0 under the left edge, horizon under the right edge
    let end_label = horizon.to_string();
    let gap = (width + 1).saturating_sub(end_label.len());
    out.push_str(&format!(
        "{:label_w$} 0{}{end_label}\n",
        "",
        " ".repeat(gap)
    ));
    out
}

/// Maps a tick onto a chart column in `0..=width`.
fn column(t: Tick, horizon: Tick, width: usize) -> usize {
    let col = (t as i128 * width as i128) / horizon as i128;
    col.clamp(0, width as i128) as usize
}
