use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::models::duration_ms;
use crate::models::Cadence;

/// Per-cadence interval configuration.
///
/// The tuning bounds are derived from the default interval: half of it on
/// the low side, double it on the high side. Invariant after any
/// adjustment: `min_interval() <= current_interval <= max_interval()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Baseline interval this cadence was configured with.
    #[serde(with = "duration_ms")]
    pub default_interval: Duration,
    /// Interval currently in force.
    #[serde(with = "duration_ms")]
    pub current_interval: Duration,
}

impl CadenceConfig {
    /// Create a config with `current_interval` at the default.
    pub fn new(default_interval: Duration) -> Self {
        Self {
            default_interval,
            current_interval: default_interval,
        }
    }

    /// Config for a cadence using its built-in default interval.
    pub fn for_cadence(cadence: Cadence) -> Self {
        Self::new(cadence.default_interval())
    }

    /// Lower tuning bound: half the default interval.
    pub fn min_interval(&self) -> Duration {
        self.default_interval / 2
    }

    /// Upper tuning bound: double the default interval.
    pub fn max_interval(&self) -> Duration {
        self.default_interval * 2
    }

    /// Clamp an interval into `[min_interval, max_interval]`.
    pub fn clamp(&self, interval: Duration) -> Duration {
        interval.clamp(self.min_interval(), self.max_interval())
    }

    /// Set the current interval, clamping into bounds.
    /// Returns the interval actually stored.
    pub fn set_current(&mut self, interval: Duration) -> Duration {
        self.current_interval = self.clamp(interval);
        self.current_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_derive_from_default() {
        let cfg = CadenceConfig::new(Duration::seconds(30));
        assert_eq!(cfg.min_interval(), Duration::seconds(15));
        assert_eq!(cfg.max_interval(), Duration::seconds(60));
    }

    #[test]
    fn set_current_clamps_both_sides() {
        let mut cfg = CadenceConfig::new(Duration::seconds(30));
        assert_eq!(cfg.set_current(Duration::seconds(5)), Duration::seconds(15));
        assert_eq!(cfg.set_current(Duration::hours(1)), Duration::seconds(60));
        assert_eq!(cfg.set_current(Duration::seconds(45)), Duration::seconds(45));
    }

    #[test]
    fn zero_default_pins_current_at_zero() {
        let mut cfg = CadenceConfig::for_cadence(Cadence::Immediate);
        assert_eq!(cfg.set_current(Duration::seconds(10)), Duration::zero());
    }
}
