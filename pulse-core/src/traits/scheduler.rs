use chrono::Duration;

use crate::models::{Cadence, EconomicValue};

/// The scheduling surface an orchestrator drives.
///
/// The orchestrator polls `should_execute` at its own cadence, runs the
/// work itself, and reports the outcome through `record_execution`.
pub trait ICadenceScheduler: Send + Sync {
    /// Whether the cadence is due to run now.
    fn should_execute(&self, cadence: Cadence) -> bool;

    /// Report one completed unit of work.
    fn record_execution(
        &self,
        cadence: Cadence,
        success: bool,
        duration: Duration,
        goal: &str,
        value: EconomicValue,
    );

    /// Current polling interval for the cadence.
    fn interval(&self, cadence: Cadence) -> Duration;
}
