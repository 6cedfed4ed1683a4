use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// One of the five fixed scheduling tiers.
///
/// Each cadence owns its own polling interval. `Immediate` is always
/// zero-interval and exempt from adaptive tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Immediate,
    Continuous,
    Analysis,
    Optimization,
    Evolution,
}

impl Cadence {
    /// All cadences, in tier order.
    pub const ALL: [Cadence; 5] = [
        Cadence::Immediate,
        Cadence::Continuous,
        Cadence::Analysis,
        Cadence::Optimization,
        Cadence::Evolution,
    ];

    /// Built-in default interval for this cadence.
    pub fn default_interval(self) -> Duration {
        Duration::seconds(self.default_interval_secs() as i64)
    }

    /// Built-in default interval in whole seconds.
    pub fn default_interval_secs(self) -> u64 {
        match self {
            Cadence::Immediate => 0,
            Cadence::Continuous => defaults::DEFAULT_CONTINUOUS_INTERVAL_SECS,
            Cadence::Analysis => defaults::DEFAULT_ANALYSIS_INTERVAL_SECS,
            Cadence::Optimization => defaults::DEFAULT_OPTIMIZATION_INTERVAL_SECS,
            Cadence::Evolution => defaults::DEFAULT_EVOLUTION_INTERVAL_SECS,
        }
    }

    /// Whether this cadence participates in adaptive frequency tuning.
    /// `Immediate` never does.
    pub fn is_tunable(self) -> bool {
        !matches!(self, Cadence::Immediate)
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Cadence::Immediate => "immediate",
            Cadence::Continuous => "continuous",
            Cadence::Analysis => "analysis",
            Cadence::Optimization => "optimization",
            Cadence::Evolution => "evolution",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
