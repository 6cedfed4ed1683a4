#[path = "property/scheduler_properties.rs"]
mod scheduler_properties;
