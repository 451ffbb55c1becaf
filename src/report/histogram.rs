//! Horizontal bar histograms of per-process metrics.

use crate::models::{Process, Tick};

use super::RenderConfig;

/// Renders a titled horizontal bar chart.
///
/// The largest value spans `chart_width` columns; other bars scale
/// proportionally. Zero values draw no bar.
pub fn render_histogram(title: &str, entries: &[(String, Tick)], config: &RenderConfig) -> String {
    let mut out = format!("{title}\n");
    if entries.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let label_w = entries.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let max = entries.iter().map(|&(_, v)| v).max().unwrap_or(0).max(0);

    for (label, value) in entries {
        let len = if max == 0 || *value <= 0 {
            0
        } else {
            ((*value as i128 * config.chart_width as i128) / max as i128) as usize
        };
        let bar: String = std::iter::repeat(config.bar_char).take(len).collect();
        out.push_str(&format!("{label:<label_w$} | {bar} {value}\n"));
    }
    out
}

/// Waiting time per process.
pub fn waiting_histogram(processes: &[Process], config: &RenderConfig) -> String {
    let entries: Vec<(String, Tick)> = processes
        .iter()
        .map(|p| (p.label(), p.waiting_time))
        .collect();
    render_histogram("Waiting Time per Process", &entries, config)
}

/// Turnaround time per process.
pub fn turnaround_histogram(processes: &[Process], config: &RenderConfig) -> String {
    let entries: Vec<(String, Tick)> = processes
        .iter()
        .map(|p| (p.label(), p.turnaround_time))
        .collect();
    render_histogram("Turnaround Time per Process", &entries, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::schedule;

    fn config() -> RenderConfig {
        RenderConfig {
            chart_width: 12,
            bar_char: '*',
        }
    }

    #[test]
    fn test_histogram_scaling() {
        let entries = vec![("A".to_string(), 6), ("BB".to_string(), 3), ("C".to_string(), 0)];
        let chart = render_histogram("T", &entries, &config());
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "T");
        assert_eq!(lines[1], format!("A  | {} 6", "*".repeat(12)));
        assert_eq!(lines[2], format!("BB | {} 3", "*".repeat(6)));
        assert_eq!(lines[3], "C  |  0");
    }

    #[test]
    fn test_all_zero_values() {
        let out = schedule(vec![Process::new(1, 0, 2), Process::new(2, 10, 5)]).unwrap();
        let chart = waiting_histogram(&out, &config());
        assert!(chart.starts_with("Waiting Time per Process\n"));
        assert!(!chart.contains('*'));
    }

    #[test]
    fn test_turnaround_histogram() {
        let out = schedule(vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ])
        .unwrap();
        let chart = turnaround_histogram(&out, &config());
        let lines: Vec<&str> = chart.lines().collect();
        // Turnaround 5, 7, 7 → P2 and P3 take the full width
        assert!(lines[1].ends_with(" 5"));
        assert_eq!(lines[2].matches('*').count(), 12);
        assert_eq!(lines[3].matches('*').count(), 12);
        assert_eq!(lines[1].matches('*').count(), 8);
    }

    #[test]
    fn test_empty_histogram() {
        let chart = waiting_histogram(&[], &config());
        assert_eq!(chart, "Waiting Time per Process\n(no data)\n");
    }
}
