use crate::models::Cadence;

/// Scheduler errors.
///
/// The error surface is deliberately small: interval validation, config
/// parsing, and the typed goal-evaluator boundary. Every other operation
/// is total and degrades to conservative defaults instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("negative interval for {cadence} cadence: {requested_ms}ms")]
    NegativeInterval { cadence: Cadence, requested_ms: i64 },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("malformed goal assessment: {reason}")]
    MalformedAssessment { reason: String },
}
