//! # pulse-scheduler
//!
//! Self-tuning periodic scheduling with feedback control.
//!
//! [`AdaptiveScheduler`] tracks execution history per cadence, computes
//! success rates and value/time ratios, and proposes bounded interval
//! adjustments. It owns no threads and no timers: an external
//! orchestrator polls [`AdaptiveScheduler::should_execute`], runs the
//! work, and reports outcomes through
//! [`AdaptiveScheduler::record_execution`].

pub mod engine;
pub mod evaluator;
pub mod history;
pub mod metrics;
pub mod policy;

pub use engine::AdaptiveScheduler;
pub use evaluator::FixedEvaluator;
