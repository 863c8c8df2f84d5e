use std::collections::HashMap;

use analytics::{ValueDashboard, ValueEngine};
use chrono::{DateTime, NaiveDate, Utc};
use configuration::Config;
use core_types::{Project, ProjectType};
use templates::metric_templates;
use uuid::Uuid;

use crate::error::PortfolioError;
use crate::overview::{PortfolioOverview, ProjectDigest};

/// An in-memory registry of project aggregates.
///
/// The registry is the write side of the workspace: it creates and removes
/// projects and routes measurements to them. Everything it reports back out
/// (dashboards, overviews) is computed on demand by the analytics engine.
#[derive(Debug)]
pub struct ProjectRegistry {
    config: Config,
    engine: ValueEngine,
    projects: HashMap<Uuid, Project>,
}

impl ProjectRegistry {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            engine: ValueEngine::new(),
            projects: HashMap::new(),
        }
    }

    /// Creates a project, seeding it with its type's starter metrics when
    /// the configuration asks for that, and returns its id.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        project_type: ProjectType,
        created_at: DateTime<Utc>,
    ) -> Uuid {
        let mut project = Project::new(name, project_type, created_at);
        if self.config.portfolio.seed_template_metrics {
            for metric in metric_templates(project_type) {
                project.add_metric(metric);
            }
        }
        tracing::info!(project_id = %project.id, ?project_type, name = %project.name, "project created");
        self.insert_project(project)
    }

    /// Registers an already-built project aggregate.
    pub fn insert_project(&mut self, project: Project) -> Uuid {
        let id = project.id;
        self.projects.insert(id, project);
        id
    }

    pub fn project(&self, id: Uuid) -> Result<&Project, PortfolioError> {
        self.projects
            .get(&id)
            .ok_or(PortfolioError::ProjectNotFound(id))
    }

    pub fn project_mut(&mut self, id: Uuid) -> Result<&mut Project, PortfolioError> {
        self.projects
            .get_mut(&id)
            .ok_or(PortfolioError::ProjectNotFound(id))
    }

    /// Removes a project and, with it, everything the aggregate owns.
    pub fn remove_project(&mut self, id: Uuid) -> Result<Project, PortfolioError> {
        let project = self
            .projects
            .remove(&id)
            .ok_or(PortfolioError::ProjectNotFound(id))?;
        tracing::info!(project_id = %id, "project removed");
        Ok(project)
    }

    /// Records a measurement against a metric of a registered project.
    pub fn record_measurement(
        &mut self,
        project_id: Uuid,
        metric_id: Uuid,
        value: f64,
        measured_at: DateTime<Utc>,
        notes: impl Into<String>,
    ) -> Result<Uuid, PortfolioError> {
        let project = self.project_mut(project_id)?;
        let id = project.record_measurement(metric_id, value, measured_at, notes)?;
        Ok(id)
    }

    /// The dashboard record for one project, using the configured
    /// recent-measurements window.
    pub fn dashboard(&self, id: Uuid, as_of: NaiveDate) -> Result<ValueDashboard, PortfolioError> {
        let project = self.project(id)?;
        Ok(self.engine.dashboard(
            project,
            as_of,
            self.config.dashboard.recent_measurements_limit,
        ))
    }

    /// Rolls every registered project up into the portfolio overview.
    /// Project digests are ordered by name for stable presentation.
    pub fn portfolio_overview(&self) -> PortfolioOverview {
        let mut overview = PortfolioOverview {
            total_projects: self.projects.len(),
            by_type: Default::default(),
            by_status: Default::default(),
            total_estimated_value: 0.0,
            projects: Vec::with_capacity(self.projects.len()),
        };

        for project in self.projects.values() {
            *overview.by_type.entry(project.project_type).or_insert(0) += 1;
            *overview.by_status.entry(project.status).or_insert(0) += 1;
            overview.total_estimated_value += project.estimated_total_value;
            overview.projects.push(ProjectDigest {
                id: project.id,
                name: project.name.clone(),
                project_type: project.project_type,
                status: project.status,
                estimated_value: project.estimated_total_value,
                current_roi: self.engine.portfolio_roi(project),
            });
        }
        overview.projects.sort_by(|a, b| a.name.cmp(&b.name));
        overview
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_types::ProjectStatus;

    const EPS: f64 = 1e-9;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
    }

    fn no_seed_config() -> Config {
        let mut config = Config::default();
        config.portfolio.seed_template_metrics = false;
        config
    }

    #[test]
    fn created_projects_are_seeded_from_templates() {
        let mut registry = ProjectRegistry::new(Config::default());
        let id = registry.create_project("Cloud Migration", ProjectType::Infrastructure, ts(1));

        let project = registry.project(id).unwrap();
        assert_eq!(project.metrics.len(), 3);
        assert!(project
            .metrics
            .values()
            .any(|m| m.name == "System Availability"));
    }

    #[test]
    fn seeding_can_be_disabled() {
        let mut registry = ProjectRegistry::new(no_seed_config());
        let id = registry.create_project("Customer Portal", ProjectType::SoftwareDevelopment, ts(1));
        assert!(registry.project(id).unwrap().metrics.is_empty());
    }

    #[test]
    fn unknown_project_and_metric_ids_surface_as_errors() {
        let mut registry = ProjectRegistry::new(no_seed_config());
        let missing = Uuid::new_v4();
        assert!(matches!(
            registry.project(missing),
            Err(PortfolioError::ProjectNotFound(_))
        ));

        let id = registry.create_project("Digital Workflow", ProjectType::DigitalTransformation, ts(1));
        let err = registry
            .record_measurement(id, Uuid::new_v4(), 1.0, ts(2), "")
            .unwrap_err();
        assert!(matches!(err, PortfolioError::Core(_)));
    }

    #[test]
    fn removal_drops_the_whole_aggregate() {
        let mut registry = ProjectRegistry::new(Config::default());
        let id = registry.create_project("Cloud Migration", ProjectType::Infrastructure, ts(1));
        let metric_id = *registry.project(id).unwrap().metrics.keys().next().unwrap();
        registry
            .record_measurement(id, metric_id, 99.5, ts(2), "")
            .unwrap();

        let removed = registry.remove_project(id).unwrap();
        assert_eq!(removed.measurements.len(), 1);
        assert!(registry.is_empty());
        assert!(matches!(
            registry.dashboard(id, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()),
            Err(PortfolioError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn dashboard_uses_configured_recent_window() {
        let mut config = Config::default();
        config.dashboard.recent_measurements_limit = 2;
        let mut registry = ProjectRegistry::new(config);
        let id = registry.create_project("Cloud Migration", ProjectType::Infrastructure, ts(1));
        let metric_id = *registry.project(id).unwrap().metrics.keys().next().unwrap();
        for day in 2..=6 {
            registry
                .record_measurement(id, metric_id, day as f64, ts(day), "")
                .unwrap();
        }

        let dashboard = registry
            .dashboard(id, NaiveDate::from_ymd_opt(2025, 3, 7).unwrap())
            .unwrap();
        assert_eq!(dashboard.recent_measurements.len(), 2);
    }

    #[test]
    fn overview_tallies_types_statuses_value_and_roi() {
        let mut registry = ProjectRegistry::new(Config::default());
        let infra = registry.create_project("Cloud Migration", ProjectType::Infrastructure, ts(1));
        let dev = registry.create_project("Customer Portal", ProjectType::SoftwareDevelopment, ts(1));
        registry.create_project("Digital Workflow", ProjectType::DigitalTransformation, ts(1));

        {
            let project = registry.project_mut(infra).unwrap();
            project.status = ProjectStatus::Active;
            project.estimated_total_value = 50000.0;
        }
        registry.project_mut(dev).unwrap().estimated_total_value = 20000.0;

        // Give the infrastructure project a measured cost so it accrues ROI.
        let cost_id = {
            let project = registry.project(infra).unwrap();
            project
                .metrics
                .values()
                .find(|m| m.name == "Infrastructure Cost")
                .unwrap()
                .id
        };
        registry
            .record_measurement(infra, cost_id, 9000.0, ts(2), "monthly invoice")
            .unwrap();

        let overview = registry.portfolio_overview();
        assert_eq!(overview.total_projects, 3);
        assert_eq!(overview.by_type[&ProjectType::Infrastructure], 1);
        assert_eq!(overview.by_type[&ProjectType::SoftwareDevelopment], 1);
        assert_eq!(overview.by_status[&ProjectStatus::Planning], 2);
        assert_eq!(overview.by_status[&ProjectStatus::Active], 1);
        assert!((overview.total_estimated_value - 70000.0).abs() < EPS);

        assert_eq!(overview.projects.len(), 3);
        // Digests come back sorted by name.
        assert_eq!(overview.projects[0].name, "Cloud Migration");
        assert!((overview.projects[0].current_roi - 9000.0).abs() < EPS);
        assert_eq!(overview.projects[1].current_roi, 0.0);
    }
}
