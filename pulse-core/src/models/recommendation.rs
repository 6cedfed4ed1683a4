use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::duration_ms;
use super::Cadence;

/// A proposed interval adjustment for one cadence.
/// Ephemeral: computed fresh on each recommendation pass, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyChange {
    /// The cadence to adjust.
    pub cadence: Cadence,
    /// Interval at the time the recommendation was computed.
    #[serde(with = "duration_ms")]
    pub current_interval: Duration,
    /// Proposed interval, already clamped to the cadence's bounds.
    #[serde(with = "duration_ms")]
    pub recommended_interval: Duration,
    /// Observed success rate that drove the proposal.
    pub success_rate: f64,
    /// Observed value/time ratio that drove the proposal.
    pub value_time_ratio: f64,
    /// Human-readable rationale, including a clamping note when applicable.
    pub justification: String,
    /// How confident the policy is in this proposal (0.0–1.0).
    pub confidence: f64,
}

/// Output bundle of one recommendation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrequencyReview {
    /// Diagnostic questions, one per cadence that could not be analyzed
    /// plus one per proposed change.
    pub questions: Vec<String>,
    /// Human-readable summaries of each proposed adjustment.
    pub adaptations: Vec<String>,
    /// The proposed changes themselves.
    pub changes: Vec<FrequencyChange>,
}

impl FrequencyReview {
    /// True when the pass produced no proposals and no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.adaptations.is_empty() && self.changes.is_empty()
    }
}
