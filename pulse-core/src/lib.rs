//! # pulse-core
//!
//! Foundation crate for the Pulse adaptive scheduler.
//! Defines all types, traits, errors, config, and constants.
//! The engine crate (`pulse-scheduler`) depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CadenceConfig, SchedulerConfig};
pub use errors::{PulseResult, SchedulerError};
pub use models::{
    Cadence, CadenceMetrics, EconomicValue, ExecutionRecord, FrequencyAdaptation,
    FrequencyChange, FrequencyReview, GoalAssessment, SchedulerSnapshot,
};
pub use traits::{ICadenceScheduler, IGoalEvaluator};
