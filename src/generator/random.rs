//! Random process generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{Process, Tick};

/// Ranges for randomly generated process sets. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Processes per generated set.
    pub process_count: usize,
    /// Earliest arrival time.
    pub arrival_min: Tick,
    /// Latest arrival time.
    pub arrival_max: Tick,
    /// Shortest burst.
    pub burst_min: Tick,
    /// Longest burst.
    pub burst_max: Tick,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            process_count: 5,
            arrival_min: 0,
            arrival_max: 10,
            burst_min: 1,
            burst_max: 10,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of processes per set.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the inclusive arrival range.
    pub fn with_arrival_range(mut self, min: Tick, max: Tick) -> Self {
        self.arrival_min = min;
        self.arrival_max = max;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: Tick, max: Tick) -> Self {
        self.burst_min = min;
        self.burst_max = max;
        self
    }

    /// Checks that the ranges can only produce valid processes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.process_count == 0 {
            return Err(ConfigError::invalid("process_count", "must be at least 1"));
        }
        if self.arrival_min < 0 {
            return Err(ConfigError::invalid("arrival_min", "must not be negative"));
        }
        if self.arrival_min > self.arrival_max {
            return Err(ConfigError::invalid(
                "arrival_max",
                format!("{} is below arrival_min {}", self.arrival_max, self.arrival_min),
            ));
        }
        if self.burst_min < 1 {
            return Err(ConfigError::invalid("burst_min", "must be at least 1"));
        }
        if self.burst_min > self.burst_max {
            return Err(ConfigError::invalid(
                "burst_max",
                format!("{} is below burst_min {}", self.burst_max, self.burst_min),
            ));
        }
        Ok(())
    }
}

/// Generates random process sets from a [`GeneratorConfig`].
///
/// # Example
///
/// ```
/// use fcfs_sim::generator::{GeneratorConfig, ProcessGenerator};
///
/// let mut generator = ProcessGenerator::seeded(GeneratorConfig::default(), 42).unwrap();
/// let processes = generator.generate();
/// assert_eq!(processes.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessGenerator<R: Rng = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl ProcessGenerator<StdRng> {
    /// Creates a reproducible generator from a seed.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the OS.
    pub fn from_entropy(config: GeneratorConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> ProcessGenerator<R> {
    /// Creates a generator over a caller-supplied RNG.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Generates `process_count` processes with PIDs `1..=process_count`.
    pub fn generate(&mut self) -> Vec<Process> {
        self.generate_n(self.config.process_count)
    }

    /// Generates `count` processes with PIDs `1..=count`.
    pub fn generate_n(&mut self, count: usize) -> Vec<Process> {
        (1..=count)
            .map(|pid| {
                let arrival = self
                    .rng
                    .random_range(self.config.arrival_min..=self.config.arrival_max);
                let burst = self
                    .rng
                    .random_range(self.config.burst_min..=self.config.burst_max);
                Process::new(pid as u32, arrival, burst)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_generated_within_ranges() {
        let config = GeneratorConfig::default()
            .with_process_count(50)
            .with_arrival_range(3, 7)
            .with_burst_range(2, 4);
        let mut generator = ProcessGenerator::seeded(config, 7).unwrap();
        let processes = generator.generate();

        assert_eq!(processes.len(), 50);
        assert!(validate_processes(&processes).is_ok());
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.pid, i as u32 + 1);
            assert!((3..=7).contains(&p.arrival_time));
            assert!((2..=4).contains(&p.burst_time));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = ProcessGenerator::seeded(GeneratorConfig::default(), 99)
            .unwrap()
            .generate();
        let b = ProcessGenerator::seeded(GeneratorConfig::default(), 99)
            .unwrap()
            .generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges() {
        let config = GeneratorConfig::default()
            .with_arrival_range(4, 4)
            .with_burst_range(1, 1);
        let processes = ProcessGenerator::seeded(config, 0).unwrap().generate_n(3);
        assert!(processes
            .iter()
            .all(|p| p.arrival_time == 4 && p.burst_time == 1));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = [
            GeneratorConfig::default().with_process_count(0),
            GeneratorConfig::default().with_arrival_range(-1, 5),
            GeneratorConfig::default().with_arrival_range(6, 5),
            GeneratorConfig::default().with_burst_range(0, 5),
            GeneratorConfig::default().with_burst_range(5, 2),
        ];
        for config in bad {
            assert!(matches!(
                ProcessGenerator::seeded(config, 1),
                Err(ConfigError::Invalid { .. })
            ));
        }
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"burst_max": 20}"#).unwrap();
        assert_eq!(config.burst_max, 20);
        assert_eq!(config.process_count, 5);
        assert!(config.validate().is_ok());
    }
}
