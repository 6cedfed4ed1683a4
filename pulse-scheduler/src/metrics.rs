//! Wasted-execution heuristic and per-cadence metrics assembly.

use chrono::Duration;

use pulse_core::constants::WASTED_DURATION_FRACTION;
use pulse_core::models::{CadenceMetrics, ExecutionRecord};

use crate::history::CadenceState;
use crate::policy;

/// A run is wasted when it failed outright, or finished in under 10% of
/// its cadence's current interval — too fast to have done real work at
/// that cadence. Metric only; never an automatic penalty.
pub fn is_wasted(record: &ExecutionRecord, current_interval: Duration) -> bool {
    if !record.success {
        return true;
    }
    record.duration < policy::scale(current_interval, WASTED_DURATION_FRACTION)
}

/// Assemble metrics for one cadence. Counts come from the running
/// counters; the wasted count scans the bounded history against the
/// current interval, since retuning changes what counts as too fast.
pub fn compute(state: &CadenceState) -> CadenceMetrics {
    let current = state.config.current_interval;
    let wasted = state.history().filter(|r| is_wasted(r, current)).count() as u64;
    CadenceMetrics {
        execution_count: state.totals.executions,
        success_count: state.totals.successes,
        wasted_execution_count: wasted,
        total_execution_time: state.totals.total_execution_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pulse_core::models::{Cadence, EconomicValue};

    fn record(success: bool, duration: Duration) -> ExecutionRecord {
        ExecutionRecord::new(
            Cadence::Continuous,
            success,
            duration,
            Utc::now(),
            "goal",
            EconomicValue::new(50),
        )
    }

    #[test]
    fn failure_is_always_wasted() {
        assert!(is_wasted(
            &record(false, Duration::seconds(20)),
            Duration::seconds(30)
        ));
    }

    #[test]
    fn too_fast_success_is_wasted() {
        // 10% of 30s is 3s.
        assert!(is_wasted(
            &record(true, Duration::seconds(2)),
            Duration::seconds(30)
        ));
        assert!(!is_wasted(
            &record(true, Duration::seconds(3)),
            Duration::seconds(30)
        ));
    }

    #[test]
    fn zero_interval_only_counts_failures() {
        assert!(!is_wasted(&record(true, Duration::zero()), Duration::zero()));
        assert!(is_wasted(&record(false, Duration::zero()), Duration::zero()));
    }
}
