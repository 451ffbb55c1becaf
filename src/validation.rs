//! Input validation for process sets.
//!
//! Checks structural integrity of processes before scheduling. Detects:
//! - Negative arrival times
//! - Non-positive burst times (would move the clock backwards or stall it)
//! - Duplicate process IDs
//!
//! The scheduler only enforces the timing checks; duplicate detection is
//! offered to callers that build process sets (menu, file loader).

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process ID.
    pub pid: u32,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same PID.
    DuplicatePid,
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, pid: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            pid,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the timing attributes the scheduler depends on.
///
/// Checks:
/// 1. `arrival_time >= 0`
/// 2. `burst_time > 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_timing(processes: &[Process]) -> ValidationResult {
    let errors = timing_errors(processes);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a complete process set.
///
/// Checks the timing attributes plus PID uniqueness.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = timing_errors(processes);

    let mut seen = HashSet::new();
    for p in processes {
        if !seen.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                p.pid,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn timing_errors(processes: &[Process]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for p in processes {
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                p.pid,
                format!(
                    "Process {} has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                p.pid,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }
    }

    errors
}
