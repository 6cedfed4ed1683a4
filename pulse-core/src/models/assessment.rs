use serde::{Deserialize, Serialize};

use super::{Cadence, EconomicValue};

/// Typed result of evaluating a goal: which cadence it belongs to and
/// what it is worth. Produced by an [`crate::traits::IGoalEvaluator`];
/// the scheduler never sees unstructured evaluator output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAssessment {
    /// The cadence the goal should run under.
    pub cadence: Cadence,
    /// Assessed worth of executing the goal.
    pub value: EconomicValue,
}
