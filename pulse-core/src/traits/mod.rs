//! Trait seams between the scheduler and its collaborators.

pub mod evaluator;
pub mod scheduler;

pub use evaluator::IGoalEvaluator;
pub use scheduler::ICadenceScheduler;
