use std::collections::BTreeMap;

use chrono::NaiveDate;
use core_types::{DeliverableStatus, MetricType, Project, ValueMetric};

use crate::report::{MetricSummary, ProjectInfo, RecentMeasurement, ValueDashboard};

/// Signature of a per-unit-type ROI rule: the metric plus its current value
/// in, an optional contribution out.
type RoiRule = fn(&ValueMetric, f64) -> Option<f64>;

/// Selects the ROI rule for a unit type. Adding a `MetricType` variant
/// forces a decision here.
fn roi_rule(metric_type: MetricType) -> RoiRule {
    match metric_type {
        MetricType::Currency => currency_rule,
        MetricType::Percentage => percentage_rule,
        MetricType::Time | MetricType::Count | MetricType::Score => unpriced_rule,
    }
}

/// A currency reading is already a dollar figure; it passes through as-is.
fn currency_rule(_metric: &ValueMetric, current: f64) -> Option<f64> {
    Some(current)
}

/// A percentage reading is credited as relative improvement over baseline.
/// A non-positive baseline leaves the ratio undefined.
fn percentage_rule(metric: &ValueMetric, current: f64) -> Option<f64> {
    if metric.baseline_value > 0.0 {
        Some((current - metric.baseline_value) / metric.baseline_value)
    } else {
        None
    }
}

/// Time, count, and score metrics are not dollarized.
fn unpriced_rule(_metric: &ValueMetric, _current: f64) -> Option<f64> {
    None
}

/// A stateless calculator for deriving dashboard figures from a project's
/// recorded value data.
#[derive(Debug, Default)]
pub struct ValueEngine {}

impl ValueEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized progress from baseline toward target, clamped to [0, 100].
    ///
    /// Returns 0 when no current value exists, and 0 when target equals
    /// baseline (the ratio is undefined there). Clamping bounds overshoot and
    /// regression; callers that need the unbounded deviation must compute it
    /// themselves.
    pub fn progress_percent(&self, metric: &ValueMetric, current: Option<f64>) -> f64 {
        let Some(current) = current else {
            return 0.0;
        };
        if metric.target_value == metric.baseline_value {
            return 0.0;
        }
        let progress = (current - metric.baseline_value)
            / (metric.target_value - metric.baseline_value)
            * 100.0;
        progress.clamp(0.0, 100.0)
    }

    /// The value credited toward the project's ROI figure for one metric,
    /// dispatched on the metric's unit type. Absent when no current value
    /// exists or the unit type is not dollarized.
    pub fn roi_contribution(&self, metric: &ValueMetric, current: Option<f64>) -> Option<f64> {
        let current = current?;
        roi_rule(metric.metric_type)(metric, current)
    }

    /// Metric name -> ROI contribution over the project's active metrics
    /// with a measured current value.
    pub fn roi_summary(&self, project: &Project) -> BTreeMap<String, f64> {
        let mut summary = BTreeMap::new();
        for metric in project.metrics.values().filter(|m| m.is_active) {
            let current = project.latest_value(metric.id);
            if let Some(contribution) = self.roi_contribution(metric, current) {
                summary.insert(metric.name.clone(), contribution);
            }
        }
        summary
    }

    /// The project's aggregate ROI figure: the sum of all contributions.
    pub fn portfolio_roi(&self, project: &Project) -> f64 {
        self.roi_summary(project).values().sum()
    }

    /// Tally of deliverables by lifecycle status. Statuses with no
    /// deliverables are absent from the map.
    pub fn deliverable_status_counts(
        &self,
        project: &Project,
    ) -> BTreeMap<DeliverableStatus, usize> {
        let mut counts = BTreeMap::new();
        for deliverable in project.deliverables.values() {
            *counts.entry(deliverable.status).or_insert(0) += 1;
        }
        counts
    }

    /// The `limit` most recent measurements across all of the project's
    /// metrics, newest first. A measurement whose metric no longer resolves
    /// is reported under the name "unknown" rather than dropped.
    pub fn recent_measurements(&self, project: &Project, limit: usize) -> Vec<RecentMeasurement> {
        let mut measurements: Vec<_> = project.measurements.iter().collect();
        measurements.sort_by(|a, b| b.measured_at.cmp(&a.measured_at));
        measurements
            .into_iter()
            .take(limit)
            .map(|m| RecentMeasurement {
                metric: project
                    .metrics
                    .get(&m.metric_id)
                    .map(|metric| metric.name.clone())
                    .unwrap_or_else(|| "unknown".to_string()),
                value: m.value,
                date: m.measured_at.date_naive(),
                notes: m.notes.clone(),
            })
            .collect()
    }

    /// Assembles the full dashboard record for a project snapshot.
    ///
    /// `as_of` stands in for "today" so the computation stays a pure
    /// function of its inputs; project duration is measured from the start
    /// date up to it.
    pub fn dashboard(
        &self,
        project: &Project,
        as_of: NaiveDate,
        recent_limit: usize,
    ) -> ValueDashboard {
        let duration_days = project
            .start_date
            .map(|start| (as_of - start).num_days())
            .unwrap_or(0);

        let mut metrics_summary = BTreeMap::new();
        for metric in project.metrics.values() {
            let current = project.latest_value(metric.id);
            metrics_summary.insert(
                metric.name.clone(),
                MetricSummary {
                    current,
                    target: metric.target_value,
                    baseline: metric.baseline_value,
                    progress_percent: self.progress_percent(metric, current),
                },
            );
        }

        tracing::debug!(project_id = %project.id, metrics = metrics_summary.len(), "assembled dashboard");

        ValueDashboard {
            project_info: ProjectInfo {
                name: project.name.clone(),
                project_type: project.project_type,
                status: project.status,
                duration_days,
            },
            metrics_summary,
            recent_measurements: self.recent_measurements(project, recent_limit),
            roi_summary: self.roi_summary(project),
            deliverables_status: self.deliverable_status_counts(project),
        }
    }
}
