//! Per-cadence mutable state: bounded execution history plus running
//! counters.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

use pulse_core::config::CadenceConfig;
use pulse_core::models::{Cadence, ExecutionRecord, FrequencyAdaptation};

/// Unbounded running counters, incremented at record time.
///
/// Distinct from the bounded history: trimming the history never touches
/// these, so success-rate queries always reflect everything ever recorded.
#[derive(Debug, Clone)]
pub struct SuccessMetrics {
    pub executions: u64,
    pub successes: u64,
    pub total_execution_time: Duration,
}

impl Default for SuccessMetrics {
    fn default() -> Self {
        Self {
            executions: 0,
            successes: 0,
            total_execution_time: Duration::zero(),
        }
    }
}

/// All mutable state for one cadence. Entries in the engine's cadence map
/// guard one of these each, so same-cadence mutation is serialized while
/// different cadences proceed in parallel.
#[derive(Debug)]
pub struct CadenceState {
    /// Which cadence this state belongs to.
    pub cadence: Cadence,
    /// Interval configuration and tuning bounds.
    pub config: CadenceConfig,
    /// Running counters (never trimmed).
    pub totals: SuccessMetrics,
    /// Applied-change audit log for this cadence.
    pub adaptations: Vec<FrequencyAdaptation>,
    /// Most recent records, oldest first. FIFO-bounded to `capacity`.
    history: VecDeque<ExecutionRecord>,
    capacity: usize,
}

impl CadenceState {
    pub fn new(cadence: Cadence, config: CadenceConfig, capacity: usize) -> Self {
        Self {
            cadence,
            config,
            totals: SuccessMetrics::default(),
            adaptations: Vec::new(),
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, evicting the oldest once past capacity, and bump
    /// the running counters.
    pub fn record(&mut self, record: ExecutionRecord) {
        self.totals.executions += 1;
        if record.success {
            self.totals.successes += 1;
        }
        self.totals.total_execution_time += record.duration;

        self.history.push_back(record);
        while self.history.len() > self.capacity {
            self.history.pop_front();
        }
    }

    /// Records currently retained, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ExecutionRecord> {
        self.history.iter()
    }

    /// Number of records currently retained (≤ capacity).
    pub fn sample_count(&self) -> usize {
        self.history.len()
    }

    /// Success rate from the running counters. Optimistic 1.0 before the
    /// first record, so never-run cadences are not penalized.
    pub fn success_rate(&self) -> f64 {
        if self.totals.executions == 0 {
            1.0
        } else {
            self.totals.successes as f64 / self.totals.executions as f64
        }
    }

    /// Latest record timestamp in the retained history.
    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.history.iter().map(|r| r.timestamp).max()
    }

    /// Mean economic value over the retained history.
    pub fn average_value(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.history.iter().map(|r| r.value.as_f64()).sum();
        sum / self.history.len() as f64
    }

    /// Change the current interval (clamped into bounds) and append an
    /// audit record. Returns the interval actually stored.
    pub fn adapt(
        &mut self,
        new_interval: Duration,
        now: DateTime<Utc>,
        reason: String,
    ) -> Duration {
        let previous = self.config.current_interval;
        let applied = self.config.set_current(new_interval);
        self.adaptations.push(FrequencyAdaptation {
            cadence: self.cadence,
            previous_interval: previous,
            new_interval: applied,
            timestamp: now,
            reason,
        });
        applied
    }
}
