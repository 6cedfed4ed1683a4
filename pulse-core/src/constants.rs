/// Pulse system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of execution records retained per cadence.
/// Oldest records are evicted first once the cap is reached.
pub const HISTORY_CAPACITY: usize = 100;

/// Minimum number of recorded executions before a cadence is eligible
/// for a frequency recommendation.
pub const MIN_SAMPLES_FOR_RECOMMENDATION: usize = 5;

/// Confidence threshold for the gated apply path.
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;

/// A recorded execution shorter than this fraction of its cadence's
/// current interval counts as wasted (executed too eagerly).
pub const WASTED_DURATION_FRACTION: f64 = 0.1;
