use std::collections::HashMap;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::CadenceConfig;
use crate::constants;
use crate::errors::{PulseResult, SchedulerError};
use crate::models::Cadence;

/// Scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Per-cadence default-interval overrides (seconds). Key is the
    /// lowercase cadence name.
    pub interval_overrides: HashMap<String, u64>,
    /// Maximum execution records retained per cadence.
    pub history_capacity: usize,
    /// Minimum recorded executions before a cadence can be tuned.
    pub min_samples: usize,
    /// Confidence threshold used by the gated apply path.
    pub confidence_threshold: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_overrides: HashMap::new(),
            history_capacity: constants::HISTORY_CAPACITY,
            min_samples: constants::MIN_SAMPLES_FOR_RECOMMENDATION,
            confidence_threshold: constants::CONFIDENCE_THRESHOLD,
        }
    }
}

impl SchedulerConfig {
    /// Parse from a TOML document.
    pub fn from_toml_str(s: &str) -> PulseResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| SchedulerError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges.
    pub fn validate(&self) -> PulseResult<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(SchedulerError::InvalidConfig {
                reason: format!(
                    "confidence_threshold must be in [0.0, 1.0], got {}",
                    self.confidence_threshold
                ),
            });
        }
        if self.min_samples == 0 {
            return Err(SchedulerError::InvalidConfig {
                reason: "min_samples must be at least 1".to_string(),
            });
        }
        if self.history_capacity < self.min_samples {
            return Err(SchedulerError::InvalidConfig {
                reason: format!(
                    "history_capacity {} is below min_samples {}",
                    self.history_capacity, self.min_samples
                ),
            });
        }
        Ok(())
    }

    /// Default interval for a cadence, honoring overrides.
    pub fn default_interval(&self, cadence: Cadence) -> Duration {
        match self.interval_overrides.get(cadence.name()) {
            Some(secs) => Duration::seconds(*secs as i64),
            None => cadence.default_interval(),
        }
    }

    /// Build the per-cadence interval config.
    pub fn cadence_config(&self, cadence: Cadence) -> CadenceConfig {
        CadenceConfig::new(self.default_interval(cadence))
    }
}
