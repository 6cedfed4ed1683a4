use crate::errors::PulseResult;
use crate::models::GoalAssessment;

/// Goal evaluation boundary.
///
/// The real evaluator lives outside this system (an LLM-backed analysis
/// layer). The scheduler only ever sees its typed output: a cadence
/// suggestion and an economic value, or a typed failure
/// (`SchedulerError::MalformedAssessment`).
pub trait IGoalEvaluator: Send + Sync {
    /// Assess a goal: which cadence should run it, and what it is worth.
    fn assess(&self, goal: &str) -> PulseResult<GoalAssessment>;
}
