use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{
    DeliverableStatus, MeasurementFrequency, MetricType, ProjectStatus, ProjectType, ValueCategory,
};
use crate::error::CoreError;

/// A measurable value a project tracks from a baseline toward a target.
///
/// `current_value` is a denormalized cache of the most recently *inserted*
/// measurement. It is refreshed on every insert, so an out-of-order backfill
/// can leave it behind the true latest observation; readers that need the
/// authoritative value must go through [`Project::latest_value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueMetric {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: ValueCategory,
    pub metric_type: MetricType,
    pub target_value: f64,
    pub baseline_value: f64,
    pub current_value: Option<f64>,
    pub measurement_frequency: MeasurementFrequency,
    pub is_active: bool,
}

impl ValueMetric {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ValueCategory,
        metric_type: MetricType,
        baseline_value: f64,
        target_value: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            category,
            metric_type,
            target_value,
            baseline_value,
            current_value: None,
            measurement_frequency: MeasurementFrequency::default(),
            is_active: true,
        }
    }
}

/// One timestamped observation of a metric's value.
///
/// Measurements are immutable once recorded; the only permitted lifecycle
/// change is removal via [`Project::remove_measurement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: Uuid,
    pub metric_id: Uuid,
    pub value: f64,
    pub measured_at: DateTime<Utc>,
    pub notes: String,
    /// Confidence in the observation, in [0, 1].
    pub confidence_level: f64,
}

impl Measurement {
    pub fn new(metric_id: Uuid, value: f64, measured_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            metric_id,
            value,
            measured_at,
            notes: String::new(),
            confidence_level: 1.0,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_confidence(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level.clamp(0.0, 1.0);
        self
    }
}

/// A person with a stake in the project's value outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub department: String,
    pub primary_value_interests: Vec<ValueCategory>,
    /// Influence on a 1-5 scale.
    pub influence_level: u8,
}

impl Stakeholder {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: role.into(),
            department: String::new(),
            primary_value_interests: Vec::new(),
            influence_level: 1,
        }
    }
}

/// A discrete project output with a lifecycle status and an expected value
/// contribution per metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub expected_completion: NaiveDate,
    pub actual_completion: Option<NaiveDate>,
    /// Metric id -> value this deliverable is expected to contribute.
    pub value_contribution: HashMap<Uuid, f64>,
    pub status: DeliverableStatus,
}

impl Deliverable {
    pub fn new(name: impl Into<String>, expected_completion: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            expected_completion,
            actual_completion: None,
            value_contribution: HashMap::new(),
            status: DeliverableStatus::Planned,
        }
    }
}

/// The aggregate root. A project owns its metrics, measurements,
/// stakeholders, and deliverables; dropping the project drops them all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub project_type: ProjectType,
    pub created_at: DateTime<Utc>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub business_case: String,
    pub estimated_total_value: f64,
    pub metrics: HashMap<Uuid, ValueMetric>,
    pub measurements: Vec<Measurement>,
    pub stakeholders: HashMap<Uuid, Stakeholder>,
    pub deliverables: HashMap<Uuid, Deliverable>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        project_type: ProjectType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            project_type,
            created_at,
            start_date: None,
            end_date: None,
            status: ProjectStatus::Planning,
            business_case: String::new(),
            estimated_total_value: 0.0,
            metrics: HashMap::new(),
            measurements: Vec::new(),
            stakeholders: HashMap::new(),
            deliverables: HashMap::new(),
        }
    }

    /// Adds a value metric to track and returns its id.
    pub fn add_metric(&mut self, metric: ValueMetric) -> Uuid {
        let id = metric.id;
        self.metrics.insert(id, metric);
        id
    }

    pub fn add_stakeholder(&mut self, stakeholder: Stakeholder) -> Uuid {
        let id = stakeholder.id;
        self.stakeholders.insert(id, stakeholder);
        id
    }

    pub fn add_deliverable(&mut self, deliverable: Deliverable) -> Uuid {
        let id = deliverable.id;
        self.deliverables.insert(id, deliverable);
        id
    }

    /// Records a measurement against one of this project's metrics.
    ///
    /// Refreshes the owning metric's `current_value` cache with the inserted
    /// value. The cache tracks insertion order, not observation order: when
    /// the new measurement is older than the latest one already recorded for
    /// the metric, the cache goes stale and a warning is emitted.
    pub fn record_measurement(
        &mut self,
        metric_id: Uuid,
        value: f64,
        measured_at: DateTime<Utc>,
        notes: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        let measurement = Measurement::new(metric_id, value, measured_at).with_notes(notes);
        self.add_measurement(measurement)
    }

    /// Like [`Project::record_measurement`], but accepts a fully built
    /// measurement (notes, confidence level).
    pub fn add_measurement(&mut self, measurement: Measurement) -> Result<Uuid, CoreError> {
        if !self.metrics.contains_key(&measurement.metric_id) {
            return Err(CoreError::MetricNotFound(measurement.metric_id));
        }

        let latest = self
            .measurements
            .iter()
            .filter(|m| m.metric_id == measurement.metric_id)
            .map(|m| m.measured_at)
            .max();
        if latest.is_some_and(|t| measurement.measured_at < t) {
            tracing::warn!(
                metric_id = %measurement.metric_id,
                measured_at = %measurement.measured_at,
                "out-of-order measurement insert; current_value cache now lags the true latest"
            );
        }

        let id = measurement.id;
        if let Some(metric) = self.metrics.get_mut(&measurement.metric_id) {
            metric.current_value = Some(measurement.value);
        }
        self.measurements.push(measurement);
        Ok(id)
    }

    /// Removes a measurement. Deletion is the only mutation a recorded
    /// measurement supports.
    pub fn remove_measurement(&mut self, measurement_id: Uuid) -> Result<(), CoreError> {
        let pos = self
            .measurements
            .iter()
            .position(|m| m.id == measurement_id)
            .ok_or(CoreError::MeasurementNotFound(measurement_id))?;
        self.measurements.remove(pos);
        Ok(())
    }

    /// The most recent observed value for a metric, derived from the
    /// measurement log by timestamp. Never reads the `current_value` cache.
    pub fn latest_value(&self, metric_id: Uuid) -> Option<f64> {
        self.measurements
            .iter()
            .filter(|m| m.metric_id == metric_id)
            .max_by_key(|m| m.measured_at)
            .map(|m| m.value)
    }
}
