use std::collections::BTreeMap;

use core_types::{ProjectStatus, ProjectType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The cross-project rollup handed to the portfolio view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOverview {
    pub total_projects: usize,
    pub by_type: BTreeMap<ProjectType, usize>,
    pub by_status: BTreeMap<ProjectStatus, usize>,
    pub total_estimated_value: f64,
    pub projects: Vec<ProjectDigest>,
}

/// One project's line in the portfolio overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDigest {
    pub id: Uuid,
    pub name: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub estimated_value: f64,
    /// The project's current aggregate ROI, 0 when nothing contributes yet.
    pub current_roi: f64,
}
