use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Metric {0} not found in project")]
    MetricNotFound(Uuid),

    #[error("Measurement {0} not found in project")]
    MeasurementNotFound(Uuid),
}
