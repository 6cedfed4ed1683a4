//! Scheduler snapshot — point-in-time capture of tuned intervals and the
//! adaptation log, for persistence across restarts.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Cadence, FrequencyAdaptation};

/// A point-in-time capture of scheduler state worth persisting.
///
/// Execution history and success counters are deliberately excluded:
/// they describe recent runtime behavior, not configuration, and start
/// fresh after a restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Current interval per cadence, in milliseconds.
    pub interval_ms: HashMap<Cadence, i64>,
    /// Full adaptation log at snapshot time.
    pub adaptations: Vec<FrequencyAdaptation>,
}
