//! Model types shared across the workspace.

pub mod adaptation;
pub mod assessment;
pub mod cadence;
pub mod duration_ms;
pub mod economic_value;
pub mod execution;
pub mod metrics;
pub mod recommendation;
pub mod snapshot;

pub use adaptation::FrequencyAdaptation;
pub use assessment::GoalAssessment;
pub use cadence::Cadence;
pub use economic_value::EconomicValue;
pub use execution::ExecutionRecord;
pub use metrics::CadenceMetrics;
pub use recommendation::{FrequencyChange, FrequencyReview};
pub use snapshot::SchedulerSnapshot;
