//! Error types for scheduling, configuration and input parsing.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the FCFS scheduler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// One or more processes have invalid timing attributes.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// `start_time + burst_time` does not fit in a tick.
    #[error("clock overflow while scheduling process {pid}")]
    ClockOverflow { pid: u32 },
}

impl ScheduleError {
    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::ClockOverflow { .. } => &[],
        }
    }
}

/// Errors raised while loading or checking a simulation config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field is outside its allowed range.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised while parsing a textual process list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Wrong number of fields on a line.
    #[error("line {line}: expected `pid arrival burst`, found {found} field(s)")]
    FieldCount { line: usize, found: usize },

    /// A field is not an integer.
    #[error("line {line}: `{value}` is not a valid {field}")]
    NotANumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// The parsed set failed validation.
    #[error("{}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
