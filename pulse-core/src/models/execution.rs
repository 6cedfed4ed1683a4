use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::duration_ms;
use super::{Cadence, EconomicValue};

/// One observed run of a cadence's unit of work.
/// Immutable once recorded; owned by the scheduler's per-cadence history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// The cadence this run belongs to.
    pub cadence: Cadence,
    /// Whether the run succeeded.
    pub success: bool,
    /// How long the run took.
    #[serde(with = "duration_ms")]
    pub duration: Duration,
    /// When the run was recorded.
    pub timestamp: DateTime<Utc>,
    /// Opaque label for the goal that was executed.
    pub goal: String,
    /// Externally assessed worth of the run.
    pub value: EconomicValue,
}

impl ExecutionRecord {
    /// Build a record stamped with the given time.
    pub fn new(
        cadence: Cadence,
        success: bool,
        duration: Duration,
        timestamp: DateTime<Utc>,
        goal: impl Into<String>,
        value: EconomicValue,
    ) -> Self {
        Self {
            cadence,
            success,
            duration,
            timestamp,
            goal: goal.into(),
            value,
        }
    }
}
