//! Predefined process sets.
//!
//! Each scenario highlights one FCFS behaviour (queueing, idle CPU,
//! tie-breaking, the convoy effect).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// A fixed, named process set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Three overlapping arrivals that queue behind each other.
    Textbook,
    /// The CPU idles between two processes.
    IdleGap,
    /// Simultaneous arrivals resolved by input order.
    TiedArrivals,
    /// One long job delaying several short ones.
    Convoy,
    /// A single process arriving after t=0.
    LateStart,
}

impl Scenario {
    /// All scenarios, in menu order.
    pub const ALL: [Scenario; 5] = [
        Scenario::Textbook,
        Scenario::IdleGap,
        Scenario::TiedArrivals,
        Scenario::Convoy,
        Scenario::LateStart,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Textbook => "textbook",
            Scenario::IdleGap => "idle-gap",
            Scenario::TiedArrivals => "tied-arrivals",
            Scenario::Convoy => "convoy",
            Scenario::LateStart => "late-start",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Textbook => "three overlapping arrivals queue behind each other",
            Scenario::IdleGap => "the CPU idles between two processes",
            Scenario::TiedArrivals => "simultaneous arrivals run in input order",
            Scenario::Convoy => "a long job delays several short ones",
            Scenario::LateStart => "a single process arrives after t=0",
        }
    }

    /// `(arrival, burst)` pairs in input order.
    fn pairs(&self) -> &'static [(i64, i64)] {
        match self {
            Scenario::Textbook => &[(0, 5), (1, 3), (2, 1)],
            Scenario::IdleGap => &[(0, 2), (10, 5)],
            Scenario::TiedArrivals => &[(0, 4), (0, 2)],
            Scenario::Convoy => &[(0, 20), (1, 2), (2, 2), (3, 2)],
            Scenario::LateStart => &[(5, 3)],
        }
    }

    /// Builds the process set with PIDs `1..=n`.
    pub fn processes(&self) -> Vec<Process> {
        self.pairs()
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst))| Process::new(i as u32 + 1, arrival, burst))
            .collect()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Scenario::ALL.iter().map(|sc| sc.name()).collect();
                format!("unknown scenario `{s}` (expected one of: {})", names.join(", "))
            })
    }
}
