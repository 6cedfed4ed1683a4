use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::duration_ms;
use super::Cadence;

/// Audit record of one applied interval change.
/// Appended to the adaptation log whenever an interval is changed,
/// whether manually or via a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyAdaptation {
    /// The cadence whose interval changed.
    pub cadence: Cadence,
    /// Interval before the change.
    #[serde(with = "duration_ms")]
    pub previous_interval: Duration,
    /// Interval after the change.
    #[serde(with = "duration_ms")]
    pub new_interval: Duration,
    /// When the change was applied.
    pub timestamp: DateTime<Utc>,
    /// Why the change was made.
    pub reason: String,
}
