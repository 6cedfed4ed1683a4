//! Default values for scheduler configuration.

/// Default polling interval for the Continuous cadence (seconds).
pub const DEFAULT_CONTINUOUS_INTERVAL_SECS: u64 = 30;

/// Default polling interval for the Analysis cadence (seconds).
pub const DEFAULT_ANALYSIS_INTERVAL_SECS: u64 = 900;

/// Default polling interval for the Optimization cadence (seconds).
pub const DEFAULT_OPTIMIZATION_INTERVAL_SECS: u64 = 3_600;

/// Default polling interval for the Evolution cadence (seconds).
pub const DEFAULT_EVOLUTION_INTERVAL_SECS: u64 = 86_400;
