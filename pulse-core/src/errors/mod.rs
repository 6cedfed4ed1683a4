//! Error types for the Pulse workspace.

pub mod scheduler_error;

pub use scheduler_error::SchedulerError;

/// Workspace-wide result alias.
pub type PulseResult<T> = Result<T, SchedulerError>;
