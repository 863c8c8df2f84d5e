use std::collections::BTreeMap;

use chrono::NaiveDate;
use core_types::{DeliverableStatus, ProjectStatus, ProjectType};
use serde::{Deserialize, Serialize};

/// A project's complete dashboard record.
///
/// This struct is the final output of the `ValueEngine` and serves as the
/// data transfer object for dashboard results handed to the presentation
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDashboard {
    pub project_info: ProjectInfo,
    /// Metric name -> progress summary, for every metric the project tracks.
    pub metrics_summary: BTreeMap<String, MetricSummary>,
    /// The newest measurements across all metrics, newest first.
    pub recent_measurements: Vec<RecentMeasurement>,
    /// Metric name -> ROI contribution, for active metrics that contribute.
    pub roi_summary: BTreeMap<String, f64>,
    pub deliverables_status: BTreeMap<DeliverableStatus, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    /// Days elapsed since the project's start date, 0 if it has not started.
    pub duration_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub current: Option<f64>,
    pub target: f64,
    pub baseline: f64,
    /// Normalized distance from baseline toward target, clamped to [0, 100].
    pub progress_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentMeasurement {
    pub metric: String,
    pub value: f64,
    pub date: NaiveDate,
    pub notes: String,
}
