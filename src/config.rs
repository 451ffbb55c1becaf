//! Simulator configuration.
//!
//! Loaded from a JSON file; every field is optional and falls back to its
//! default. Command-line flags override file values.
//!
//! ```json
//! {
//!   "generator": { "process_count": 8, "arrival_max": 20, "burst_max": 12 },
//!   "runs": 500,
//!   "seed": 42,
//!   "render": { "chart_width": 60, "bar_char": "=" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::generator::GeneratorConfig;
use crate::report::RenderConfig;
use crate::sim::BatchConfig;

/// Top-level simulator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Random process set ranges.
    pub generator: GeneratorConfig,
    /// Batch run count. Defaults to the batch default when absent.
    pub runs: Option<usize>,
    /// RNG seed. `None` = seed from the OS for single runs, 0 for batches.
    pub seed: Option<u64>,
    /// Chart rendering options.
    pub render: RenderConfig,
}

impl SimConfig {
    /// Loads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates a JSON config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        self.render.validate()?;
        if self.runs == Some(0) {
            return Err(ConfigError::invalid("runs", "must be at least 1"));
        }
        Ok(())
    }

    /// Batch settings derived from this config.
    pub fn batch_config(&self) -> BatchConfig {
        let defaults = BatchConfig::default();
        BatchConfig {
            runs: self.runs.unwrap_or(defaults.runs),
            seed: self.seed.unwrap_or(defaults.seed),
            generator: self.generator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = SimConfig::from_json(
            r#"{"generator": {"process_count": 8}, "runs": 7, "render": {"bar_char": "="}}"#,
        )
        .unwrap();
        assert_eq!(config.generator.process_count, 8);
        assert_eq!(config.generator.burst_max, GeneratorConfig::default().burst_max);
        assert_eq!(config.render.bar_char, '=');
        assert_eq!(config.render.chart_width, 50);

        let batch = config.batch_config();
        assert_eq!(batch.runs, 7);
        assert_eq!(batch.seed, 0);
        assert_eq!(batch.generator.process_count, 8);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            SimConfig::from_json(r#"{"runs": 0}"#),
            Err(ConfigError::Invalid { field: "runs", .. })
        ));
        assert!(matches!(
            SimConfig::from_json(r#"{"generator": {"burst_min": 0}}"#),
            Err(ConfigError::Invalid { field: "burst_min", .. })
        ));
        assert!(matches!(
            SimConfig::from_json(r#"{"render": {"chart_width": 2}}"#),
            Err(ConfigError::Invalid { field: "chart_width", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SimConfig::from_json("{ runs: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = SimConfig::load("/nonexistent/fcfs-sim.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/fcfs-sim.json"));
    }
}
