//! Configuration for the Pulse scheduler.

pub mod cadence_config;
pub mod defaults;
pub mod scheduler_config;

pub use cadence_config::CadenceConfig;
pub use scheduler_config::SchedulerConfig;
