//! Deterministic goal-evaluator stub.
//!
//! The real evaluator is an external LLM-backed layer; this stand-in
//! gives tests and downstream wiring a typed collaborator with no I/O.

use pulse_core::errors::{PulseResult, SchedulerError};
use pulse_core::models::{Cadence, EconomicValue, GoalAssessment};
use pulse_core::traits::IGoalEvaluator;

/// Evaluator that assigns every goal the same cadence and value.
pub struct FixedEvaluator {
    cadence: Cadence,
    value: EconomicValue,
}

impl FixedEvaluator {
    pub fn new(cadence: Cadence, value: EconomicValue) -> Self {
        Self { cadence, value }
    }
}

impl IGoalEvaluator for FixedEvaluator {
    fn assess(&self, goal: &str) -> PulseResult<GoalAssessment> {
        if goal.trim().is_empty() {
            return Err(SchedulerError::MalformedAssessment {
                reason: "empty goal".to_string(),
            });
        }
        Ok(GoalAssessment {
            cadence: self.cadence,
            value: self.value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assesses_any_nonempty_goal() {
        let evaluator = FixedEvaluator::new(Cadence::Analysis, EconomicValue::new(75));
        let assessment = evaluator.assess("improve build times").unwrap();
        assert_eq!(assessment.cadence, Cadence::Analysis);
        assert_eq!(assessment.value.value(), 75);
    }

    #[test]
    fn rejects_empty_goal() {
        let evaluator = FixedEvaluator::new(Cadence::Analysis, EconomicValue::new(75));
        assert!(matches!(
            evaluator.assess("   "),
            Err(SchedulerError::MalformedAssessment { .. })
        ));
    }
}
