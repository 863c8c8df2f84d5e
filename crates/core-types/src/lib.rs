pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{
    DeliverableStatus, MeasurementFrequency, MetricType, ProjectStatus, ProjectType, ValueCategory,
};
pub use error::CoreError;
pub use structs::{Deliverable, Measurement, Project, Stakeholder, ValueMetric};
