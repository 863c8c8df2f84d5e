use core_types::{MetricType, ProjectType, ValueCategory, ValueMetric};

/// Returns the starter metric set for a project type.
///
/// Baselines and targets are the conventional defaults for each kind of
/// project; callers are expected to adjust them once real figures exist.
pub fn metric_templates(project_type: ProjectType) -> Vec<ValueMetric> {
    tracing::debug!(?project_type, "selecting metric template");
    match project_type {
        ProjectType::Infrastructure => infrastructure_metrics(),
        ProjectType::SoftwareDevelopment => software_development_metrics(),
        ProjectType::DigitalTransformation => digital_transformation_metrics(),
    }
}

fn infrastructure_metrics() -> Vec<ValueMetric> {
    vec![
        ValueMetric::new(
            "System Availability",
            "Uptime percentage",
            ValueCategory::QualityImprovement,
            MetricType::Percentage,
            95.0,
            99.9,
        ),
        ValueMetric::new(
            "Response Time",
            "Average response time in milliseconds",
            ValueCategory::EfficiencyGain,
            MetricType::Time,
            500.0,
            200.0,
        ),
        ValueMetric::new(
            "Infrastructure Cost",
            "Monthly infrastructure costs",
            ValueCategory::CostReduction,
            MetricType::Currency,
            10000.0,
            8000.0,
        ),
    ]
}

fn software_development_metrics() -> Vec<ValueMetric> {
    vec![
        ValueMetric::new(
            "User Adoption Rate",
            "Percentage of target users actively using the software",
            ValueCategory::UserSatisfaction,
            MetricType::Percentage,
            0.0,
            80.0,
        ),
        ValueMetric::new(
            "Development Velocity",
            "Story points completed per sprint",
            ValueCategory::EfficiencyGain,
            MetricType::Count,
            30.0,
            50.0,
        ),
        ValueMetric::new(
            "Bug Resolution Time",
            "Average time to resolve bugs in hours",
            ValueCategory::QualityImprovement,
            MetricType::Time,
            72.0,
            24.0,
        ),
    ]
}

fn digital_transformation_metrics() -> Vec<ValueMetric> {
    vec![
        ValueMetric::new(
            "Process Automation Rate",
            "Percentage of manual processes automated",
            ValueCategory::EfficiencyGain,
            MetricType::Percentage,
            10.0,
            70.0,
        ),
        ValueMetric::new(
            "Employee Productivity",
            "Tasks completed per day per employee",
            ValueCategory::EfficiencyGain,
            MetricType::Count,
            10.0,
            15.0,
        ),
        ValueMetric::new(
            "Data Quality Score",
            "Data quality index (0-100)",
            ValueCategory::QualityImprovement,
            MetricType::Score,
            60.0,
            90.0,
        ),
    ]
}
