//! AdaptiveScheduler: feedback-controlled interval tuning across the five
//! cadences.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::{debug, info};

use pulse_core::config::SchedulerConfig;
use pulse_core::errors::{PulseResult, SchedulerError};
use pulse_core::models::{
    Cadence, CadenceMetrics, EconomicValue, ExecutionRecord, FrequencyAdaptation,
    FrequencyChange, FrequencyReview, SchedulerSnapshot,
};
use pulse_core::traits::ICadenceScheduler;

use crate::history::CadenceState;
use crate::metrics;
use crate::policy::{self, PolicyInputs, Proposal};

/// Self-tuning scheduler for the five cadences.
///
/// Owns per-cadence interval config, a bounded execution history, running
/// success counters, and the recommendation policy. Has no internal
/// timers; an external orchestrator polls [`should_execute`] and reports
/// outcomes via [`record_execution`]. One instance per orchestrator —
/// there is no global state.
///
/// State is sharded per cadence in a [`DashMap`]: same-cadence calls are
/// serialized by the entry lock, different cadences proceed in parallel.
///
/// [`should_execute`]: AdaptiveScheduler::should_execute
/// [`record_execution`]: AdaptiveScheduler::record_execution
pub struct AdaptiveScheduler {
    config: SchedulerConfig,
    states: DashMap<Cadence, CadenceState>,
}

impl AdaptiveScheduler {
    /// Create a scheduler with default configuration.
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    /// Create a scheduler from an explicit configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        let states = DashMap::new();
        for cadence in Cadence::ALL {
            states.insert(
                cadence,
                CadenceState::new(
                    cadence,
                    config.cadence_config(cadence),
                    config.history_capacity,
                ),
            );
        }
        Self { config, states }
    }

    fn state_mut(&self, cadence: Cadence) -> dashmap::mapref::one::RefMut<'_, Cadence, CadenceState> {
        // All five entries exist from construction; or_insert_with keeps
        // the accessor total anyway.
        self.states.entry(cadence).or_insert_with(|| {
            CadenceState::new(
                cadence,
                self.config.cadence_config(cadence),
                self.config.history_capacity,
            )
        })
    }

    /// Current polling interval for a cadence.
    pub fn interval(&self, cadence: Cadence) -> Duration {
        self.states
            .get(&cadence)
            .map(|s| s.config.current_interval)
            .unwrap_or_else(|| self.config.default_interval(cadence))
    }

    /// Manually override a cadence's interval.
    ///
    /// Rejects negative durations without mutating anything. Non-negative
    /// values are clamped into the cadence's tuning bounds, and the change
    /// is appended to the adaptation log with reason "Manual adjustment".
    pub fn set_interval(&self, cadence: Cadence, interval: Duration) -> PulseResult<()> {
        if interval < Duration::zero() {
            return Err(SchedulerError::NegativeInterval {
                cadence,
                requested_ms: interval.num_milliseconds(),
            });
        }
        let applied =
            self.state_mut(cadence)
                .adapt(interval, Utc::now(), "Manual adjustment".to_string());
        info!(
            cadence = %cadence,
            interval_ms = applied.num_milliseconds(),
            "interval set manually"
        );
        Ok(())
    }

    /// Report one completed unit of work, stamped with the given time.
    pub fn record_execution_at(
        &self,
        cadence: Cadence,
        success: bool,
        duration: Duration,
        goal: &str,
        value: EconomicValue,
        now: DateTime<Utc>,
    ) {
        let record = ExecutionRecord::new(cadence, success, duration, now, goal, value);
        self.state_mut(cadence).record(record);
        debug!(
            cadence = %cadence,
            success,
            duration_ms = duration.num_milliseconds(),
            value = value.value(),
            "execution recorded"
        );
    }

    /// Report one completed unit of work, stamped now.
    pub fn record_execution(
        &self,
        cadence: Cadence,
        success: bool,
        duration: Duration,
        goal: &str,
        value: EconomicValue,
    ) {
        self.record_execution_at(cadence, success, duration, goal, value, Utc::now());
    }

    /// When the cadence is next due, relative to the given time.
    /// With no history the cadence is due immediately.
    pub fn next_scheduled_time_at(&self, cadence: Cadence, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.states.get(&cadence) {
            Some(state) => match state.last_timestamp() {
                Some(last) => last + state.config.current_interval,
                None => now,
            },
            None => now,
        }
    }

    /// When the cadence is next due.
    pub fn next_scheduled_time(&self, cadence: Cadence) -> DateTime<Utc> {
        self.next_scheduled_time_at(cadence, Utc::now())
    }

    /// Whether the cadence is due at the given time.
    pub fn should_execute_at(&self, cadence: Cadence, now: DateTime<Utc>) -> bool {
        now >= self.next_scheduled_time_at(cadence, now)
    }

    /// Whether the cadence is due now.
    pub fn should_execute(&self, cadence: Cadence) -> bool {
        self.should_execute_at(cadence, Utc::now())
    }

    /// Success rate from the running counters, in [0, 1].
    /// Optimistic 1.0 for a cadence that has never run.
    pub fn success_rate(&self, cadence: Cadence) -> f64 {
        self.states
            .get(&cadence)
            .map(|s| s.success_rate())
            .unwrap_or(1.0)
    }

    /// Run one recommendation pass over every tunable cadence.
    ///
    /// Immediate is always zero-interval and exempt. Cadences with too few
    /// records get a "not enough data" question instead of a change.
    /// Nothing is applied here; see [`apply_changes`] and
    /// [`apply_confident_changes`].
    ///
    /// [`apply_changes`]: AdaptiveScheduler::apply_changes
    /// [`apply_confident_changes`]: AdaptiveScheduler::apply_confident_changes
    pub fn recommend_changes(&self) -> FrequencyReview {
        let mut review = FrequencyReview::default();

        for cadence in Cadence::ALL {
            if !cadence.is_tunable() {
                continue;
            }
            let Some(state) = self.states.get(&cadence) else {
                continue;
            };

            let inputs = PolicyInputs {
                success_rate: state.success_rate(),
                value_time_ratio: policy::value_time_ratio(
                    state.average_value(),
                    state.config.current_interval,
                ),
                samples: state.sample_count(),
            };

            match policy::evaluate(&state.config, &inputs, self.config.min_samples) {
                Proposal::InsufficientData => {
                    review.questions.push(format!(
                        "Not enough data to tune the {cadence} cadence yet \
                         ({} of {} executions recorded)",
                        inputs.samples, self.config.min_samples
                    ));
                }
                Proposal::NoChange { reason } => {
                    debug!(cadence = %cadence, reason = %reason, "no interval change");
                }
                Proposal::Adjust {
                    target,
                    justification,
                    confidence,
                } => {
                    let current = state.config.current_interval;
                    review.questions.push(format!(
                        "Should we change the {cadence} interval from {}s to {}s?",
                        current.num_seconds(),
                        target.num_seconds()
                    ));
                    review.adaptations.push(format!(
                        "{cadence}: {}s -> {}s ({justification})",
                        current.num_seconds(),
                        target.num_seconds()
                    ));
                    review.changes.push(FrequencyChange {
                        cadence,
                        current_interval: current,
                        recommended_interval: target,
                        success_rate: inputs.success_rate,
                        value_time_ratio: inputs.value_time_ratio,
                        justification,
                        confidence,
                    });
                }
            }
        }

        info!(
            changes = review.changes.len(),
            questions = review.questions.len(),
            "recommendation pass complete"
        );
        review
    }

    fn apply_one(&self, change: &FrequencyChange, now: DateTime<Utc>) {
        let applied = self.state_mut(change.cadence).adapt(
            change.recommended_interval,
            now,
            change.justification.clone(),
        );
        info!(
            cadence = %change.cadence,
            from_ms = change.current_interval.num_milliseconds(),
            to_ms = applied.num_milliseconds(),
            confidence = change.confidence,
            "interval adapted"
        );
    }

    /// Apply every recommended change, regardless of confidence.
    ///
    /// Counterpart of [`apply_confident_changes`], which gates on the
    /// confidence threshold. Two apply paths with different gating exist
    /// deliberately; consumers pick one policy and stick to it.
    ///
    /// [`apply_confident_changes`]: AdaptiveScheduler::apply_confident_changes
    pub fn apply_changes(&self, changes: &[FrequencyChange]) {
        let now = Utc::now();
        for change in changes {
            self.apply_one(change, now);
        }
    }

    /// Apply only the changes whose confidence meets the configured
    /// threshold (default 0.7). Returns how many were applied.
    pub fn apply_confident_changes(&self, changes: &[FrequencyChange]) -> usize {
        let now = Utc::now();
        let mut applied = 0;
        for change in changes {
            if change.confidence >= self.config.confidence_threshold {
                self.apply_one(change, now);
                applied += 1;
            } else {
                debug!(
                    cadence = %change.cadence,
                    confidence = change.confidence,
                    threshold = self.config.confidence_threshold,
                    "change skipped below confidence threshold"
                );
            }
        }
        applied
    }

    /// Per-cadence execution metrics.
    pub fn metrics(&self) -> HashMap<Cadence, CadenceMetrics> {
        Cadence::ALL
            .iter()
            .filter_map(|cadence| {
                self.states
                    .get(cadence)
                    .map(|state| (*cadence, metrics::compute(&state)))
            })
            .collect()
    }

    /// Full adaptation audit log, ordered by application time.
    pub fn adaptation_log(&self) -> Vec<FrequencyAdaptation> {
        let mut log: Vec<FrequencyAdaptation> = self
            .states
            .iter()
            .flat_map(|state| state.adaptations.clone())
            .collect();
        log.sort_by_key(|a| a.timestamp);
        log
    }

    /// Capture current intervals and the adaptation log for persistence.
    pub fn snapshot(&self) -> SchedulerSnapshot {
        let interval_ms = Cadence::ALL
            .iter()
            .map(|c| (*c, self.interval(*c).num_milliseconds()))
            .collect();
        SchedulerSnapshot {
            timestamp: Utc::now(),
            interval_ms,
            adaptations: self.adaptation_log(),
        }
    }

    /// Restore intervals (clamped into bounds) and the adaptation log
    /// from a snapshot. History and counters start fresh.
    pub fn restore(&self, snapshot: &SchedulerSnapshot) {
        for (cadence, ms) in &snapshot.interval_ms {
            let mut state = self.state_mut(*cadence);
            state.config.set_current(Duration::milliseconds(*ms));
            state.adaptations = snapshot
                .adaptations
                .iter()
                .filter(|a| a.cadence == *cadence)
                .cloned()
                .collect();
        }
        info!(
            taken_at = %snapshot.timestamp,
            adaptations = snapshot.adaptations.len(),
            "scheduler state restored from snapshot"
        );
    }
}

impl Default for AdaptiveScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ICadenceScheduler for AdaptiveScheduler {
    fn should_execute(&self, cadence: Cadence) -> bool {
        AdaptiveScheduler::should_execute(self, cadence)
    }

    fn record_execution(
        &self,
        cadence: Cadence,
        success: bool,
        duration: Duration,
        goal: &str,
        value: EconomicValue,
    ) {
        AdaptiveScheduler::record_execution(self, cadence, success, duration, goal, value);
    }

    fn interval(&self, cadence: Cadence) -> Duration {
        AdaptiveScheduler::interval(self, cadence)
    }
}
