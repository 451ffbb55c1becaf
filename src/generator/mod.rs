//! Process set sources.
//!
//! Input sets for the scheduler come from three places:
//!
//! - **`ProcessGenerator`**: random sets within configurable ranges
//! - **`Scenario`**: fixed, named sets illustrating FCFS behaviour
//! - **`parse_processes`**: user-supplied text (file or interactive entry)

mod parse;
mod random;
mod scenarios;

pub use parse::{parse_line, parse_processes};
pub use random::{GeneratorConfig, ProcessGenerator};
pub use scenarios::Scenario;
