//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Validate timing attributes (arrival >= 0, burst > 0).
//! 2. Stable-sort processes by arrival time; ties keep input order.
//! 3. Seed the running clock with the first arrival (CPU may idle before it).
//! 4. For each process: start = max(clock, arrival), then advance the clock
//!    to its completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the metric pass.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use tracing::{debug, trace, warn};

use crate::error::ScheduleError;
use crate::models::{Process, Tick};
use crate::validation::validate_timing;

/// Non-preemptive FCFS scheduler.
///
/// Holds no state between runs; every call is a pure function of its input.
///
/// # Example
///
/// ```
/// use fcfs_sim::models::Process;
/// use fcfs_sim::scheduler::FcfsScheduler;
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let scheduled = FcfsScheduler::new().schedule(processes).unwrap();
/// assert_eq!(scheduled[1].start_time, 5);
/// assert_eq!(scheduled[1].waiting_time, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules an owned process list and returns it in execution order.
    ///
    /// The returned records are the input records, reordered, with every
    /// derived timing field populated.
    pub fn schedule(&self, mut processes: Vec<Process>) -> Result<Vec<Process>, ScheduleError> {
        self.schedule_in_place(&mut processes)?;
        Ok(processes)
    }

    /// Schedules caller-owned processes in place.
    ///
    /// On success the slice is reordered into execution order. On error the
    /// slice is left untouched.
    pub fn schedule_in_place(&self, processes: &mut [Process]) -> Result<(), ScheduleError> {
        if let Err(errors) = validate_timing(processes) {
            warn!(count = errors.len(), "rejected invalid process set");
            return Err(ScheduleError::InvalidInput(errors));
        }

        // Empty input has no first arrival to seed the clock with
        let Some(first_arrival) = processes.iter().map(|p| p.arrival_time).min() else {
            debug!("empty process set, nothing to schedule");
            return Ok(());
        };

        // Overflow check before mutation so a failure leaves the input intact
        let mut clock = first_arrival;
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);
        for &i in &order {
            let p = &processes[i];
            clock = clock
                .max(p.arrival_time)
                .checked_add(p.burst_time)
                .ok_or(ScheduleError::ClockOverflow { pid: p.pid })?;
        }

        // slice::sort_by_key is stable: equal arrivals keep input order
        processes.sort_by_key(|p| p.arrival_time);

        let mut clock: Tick = first_arrival;
        for p in processes.iter_mut() {
            let start = clock.max(p.arrival_time);
            p.start_time = start;
            p.waiting_time = start - p.arrival_time;
            p.response_time = p.waiting_time;
            p.completion_time = start + p.burst_time;
            p.turnaround_time = p.completion_time - p.arrival_time;
            clock = p.completion_time;

            trace!(
                pid = p.pid,
                start = p.start_time,
                end = p.completion_time,
                wait = p.waiting_time,
                "scheduled"
            );
        }

        debug!(
            processes = processes.len(),
            first_start = first_arrival,
            last_completion = clock,
            "fcfs run complete"
        );

        Ok(())
    }
}

/// Schedules `processes` with a default [`FcfsScheduler`].
pub fn schedule(processes: Vec<Process>) -> Result<Vec<Process>, ScheduleError> {
    FcfsScheduler::new().schedule(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use proptest::prelude::*;

    fn by_pid(processes: &[Process], pid: u32) -> &Process {
        processes.iter().find(|p| p.pid == pid).unwrap()
    }

    #[test]
    fn test_single_process_idle_start() {
        let out = schedule(vec![Process::new(1, 5, 3)]).unwrap();
        assert_eq!(out.len(), 1);
        let p = &out[0];
        assert_eq!(p.start_time, 5);
        assert_eq!(p.completion_time, 8);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.response_time, 0);
        assert_eq!(p.turnaround_time, 3);
    }

    #[test]
    fn test_simple_queueing() {
        let out = schedule(vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ])
        .unwrap();

        let pids: Vec<u32> = out.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1, 2, 3]);

        let expected = [(0, 5, 0), (5, 8, 4), (8, 9, 6)];
        for (p, &(start, end, wait)) in out.iter().zip(expected.iter()) {
            assert_eq!(p.start_time, start);
            assert_eq!(p.completion_time, end);
            assert_eq!(p.waiting_time, wait);
            assert_eq!(p.turnaround_time, wait + p.burst_time);
        }
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let out = schedule(vec![Process::new(1, 0, 2), Process::new(2, 10, 5)]).unwrap();
        assert_eq!(out[0].start_time, 0);
        assert_eq!(out[0].completion_time, 2);
        // Clock jumps to the arrival, not the previous completion
        assert_eq!(out[1].start_time, 10);
        assert_eq!(out[1].completion_time, 15);
        assert_eq!(out[1].waiting_time, 0);
    }

    #[test]
    fn test_tied_arrivals_preserve_input_order() {
        let out = schedule(vec![Process::new(10, 0, 4), Process::new(20, 0, 2)]).unwrap();
        assert_eq!(out[0].pid, 10);
        assert_eq!(out[1].pid, 20);
        assert_eq!((out[0].start_time, out[0].completion_time), (0, 4));
        assert_eq!((out[1].start_time, out[1].completion_time), (4, 6));
    }

    #[test]
    fn test_unsorted_input_is_reordered() {
        let out = schedule(vec![
            Process::new(3, 4, 2),
            Process::new(1, 0, 3),
            Process::new(2, 2, 1),
        ])
        .unwrap();
        let pids: Vec<u32> = out.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1, 2, 3]);
        assert_eq!(by_pid(&out, 2).start_time, 3);
        assert_eq!(by_pid(&out, 3).start_time, 4);
        assert_eq!(by_pid(&out, 3).waiting_time, 0);
    }

    #[test]
    fn test_empty_input() {
        let out = schedule(Vec::new()).unwrap();
        assert!(out.is_empty());

        let mut empty: [Process; 0] = [];
        assert!(FcfsScheduler::new().schedule_in_place(&mut empty).is_ok());
    }

    #[test]
    fn test_invalid_burst_rejected() {
        let err = schedule(vec![Process::new(1, 0, 3), Process::new(2, 1, 0)]).unwrap_err();
        let errors = err.validation_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
        assert_eq!(errors[0].pid, 2);
    }

    #[test]
    fn test_negative_arrival_rejected() {
        let err = schedule(vec![Process::new(1, -4, 3)]).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NegativeArrival
        );
    }

    #[test]
    fn test_failed_run_leaves_input_untouched() {
        let mut processes = vec![Process::new(2, 3, 1), Process::new(1, 0, -1)];
        let before = processes.clone();
        assert!(FcfsScheduler::new()
            .schedule_in_place(&mut processes)
            .is_err());
        assert_eq!(processes, before);
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let mut processes = vec![Process::new(1, 0, Tick::MAX), Process::new(2, 1, 1)];
        let before = processes.clone();
        let err = FcfsScheduler::new()
            .schedule_in_place(&mut processes)
            .unwrap_err();
        assert_eq!(err, ScheduleError::ClockOverflow { pid: 2 });
        assert_eq!(processes, before);
    }

    #[test]
    fn test_rescheduling_overwrites_metrics() {
        let first = schedule(vec![Process::new(1, 0, 2), Process::new(2, 0, 2)]).unwrap();
        let second = schedule(first.clone()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_back_to_back_completion_equals_sum_of_bursts() {
        let processes = vec![
            Process::new(1, 3, 4),
            Process::new(2, 4, 2),
            Process::new(3, 5, 6),
            Process::new(4, 6, 1),
        ];
        let total_burst: Tick = processes.iter().map(|p| p.burst_time).sum();
        let out = schedule(processes).unwrap();
        let last = out.last().unwrap();
        assert_eq!(last.completion_time, out[0].arrival_time + total_burst);
        assert_eq!(last.completion_time - out[0].start_time, total_burst);
    }

    fn arb_processes() -> impl Strategy<Value = Vec<Process>> {
        prop::collection::vec((0i64..200, 1i64..50), 0..40).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (arrival, burst))| Process::new(i as u32 + 1, arrival, burst))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_fcfs_invariants(input in arb_processes()) {
            let out = schedule(input.clone()).unwrap();
            prop_assert_eq!(out.len(), input.len());

            for (i, p) in out.iter().enumerate() {
                prop_assert!(p.start_time >= p.arrival_time);
                prop_assert_eq!(p.response_time, p.waiting_time);
                prop_assert_eq!(p.waiting_time, p.start_time - p.arrival_time);
                prop_assert_eq!(p.completion_time, p.start_time + p.burst_time);
                prop_assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
                prop_assert!(p.turnaround_time >= p.burst_time);
                if i > 0 {
                    prop_assert!(p.start_time >= out[i - 1].completion_time);
                    prop_assert!(p.arrival_time >= out[i - 1].arrival_time);
                }
            }
        }

        #[test]
        fn prop_ties_keep_input_order(input in arb_processes()) {
            let out = schedule(input.clone()).unwrap();
            let position = |pid: u32| input.iter().position(|p| p.pid == pid).unwrap();
            for pair in out.windows(2) {
                if pair[0].arrival_time == pair[1].arrival_time {
                    prop_assert!(position(pair[0].pid) < position(pair[1].pid));
                }
            }
        }
    }
}
