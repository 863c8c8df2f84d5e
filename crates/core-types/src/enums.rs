use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Infrastructure,
    SoftwareDevelopment,
    DigitalTransformation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    CostReduction,
    RevenueIncrease,
    EfficiencyGain,
    QualityImprovement,
    RiskMitigation,
    UserSatisfaction,
}

/// The unit a metric is measured in. Drives how a metric is credited
/// toward ROI: currency values pass through, percentages become relative
/// improvements, everything else stays unpriced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    Currency,
    Percentage,
    Time,
    Count,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    /// Returns true once a project can no longer accrue value.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Default for MeasurementFrequency {
    fn default() -> Self {
        MeasurementFrequency::Monthly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_snake_case_wire_form() {
        assert_eq!(
            serde_json::to_string(&ProjectType::SoftwareDevelopment).unwrap(),
            "\"software_development\""
        );
        assert_eq!(
            serde_json::to_string(&DeliverableStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: ProjectStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(status, ProjectStatus::OnHold);
    }

    #[test]
    fn terminal_statuses() {
        assert!(ProjectStatus::Completed.is_terminal());
        assert!(ProjectStatus::Cancelled.is_terminal());
        assert!(!ProjectStatus::Active.is_terminal());
        assert!(!ProjectStatus::Planning.is_terminal());
    }
}
