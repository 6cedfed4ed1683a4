use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::duration_ms;

/// Per-cadence execution metrics.
///
/// `execution_count`, `success_count`, and `total_execution_time` are
/// unbounded running counters that survive history trimming.
/// `wasted_execution_count` is recomputed from the bounded history on
/// each query, against the cadence's current interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadenceMetrics {
    pub execution_count: u64,
    pub success_count: u64,
    pub wasted_execution_count: u64,
    #[serde(with = "duration_ms")]
    pub total_execution_time: Duration,
}
