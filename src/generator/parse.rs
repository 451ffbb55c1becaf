//! Text process-list parser.
//!
//! One process per line: `pid arrival burst`, whitespace separated.
//! Blank lines and `#` comments are ignored.
//!
//! ```text
//! # pid arrival burst
//! 1 0 5
//! 2 1 3
//! ```

use crate::error::InputError;
use crate::models::{Process, Tick};
use crate::validation::validate_processes;

/// Parses and validates a process list.
///
/// Line numbers in errors are 1-based.
pub fn parse_processes(input: &str) -> Result<Vec<Process>, InputError> {
    let mut processes = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        processes.push(parse_line(content, line)?);
    }

    validate_processes(&processes).map_err(InputError::Invalid)?;
    Ok(processes)
}

/// Parses a single `pid arrival burst` line.
pub fn parse_line(content: &str, line: usize) -> Result<Process, InputError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(InputError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let pid = parse_field::<u32>(fields[0], line, "process ID")?;
    let arrival = parse_field::<Tick>(fields[1], line, "arrival time")?;
    let burst = parse_field::<Tick>(fields[2], line, "burst time")?;
    Ok(Process::new(pid, arrival, burst))
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    line: usize,
    field: &'static str,
) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::NotANumber {
        line,
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_valid() {
        let input = "# pid arrival burst\n1 0 5\n\n2 1 3  # queued\n3\t2\t1\n";
        let processes = parse_processes(input).unwrap();
        assert_eq!(
            processes,
            vec![
                Process::new(1, 0, 5),
                Process::new(2, 1, 3),
                Process::new(3, 2, 1)
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_processes("").unwrap().is_empty());
        assert!(parse_processes("# nothing\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_processes("1 0 5\n2 1\n").unwrap_err();
        assert_eq!(err, InputError::FieldCount { line: 2, found: 2 });
    }

    #[test]
    fn test_not_a_number() {
        let err = parse_processes("1 zero 5").unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                line: 1,
                field: "arrival time",
                value: "zero".into()
            }
        );

        // Negative PIDs are not representable
        assert!(matches!(
            parse_processes("-1 0 5"),
            Err(InputError::NotANumber { field: "process ID", .. })
        ));
    }

    #[test]
    fn test_invalid_values_reported() {
        let err = parse_processes("1 0 0\n1 -2 3").unwrap_err();
        let InputError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&ValidationErrorKind::NonPositiveBurst));
        assert!(kinds.contains(&ValidationErrorKind::NegativeArrival));
        assert!(kinds.contains(&ValidationErrorKind::DuplicatePid));
    }
}
