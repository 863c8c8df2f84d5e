use serde::Deserialize;

use crate::error::ConfigError;

/// The root configuration structure for the workspace.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub portfolio: PortfolioSettings,
}

impl Config {
    /// Rejects settings that would make the dashboard degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.recent_measurements_limit == 0 {
            return Err(ConfigError::ValidationError(
                "dashboard.recent_measurements_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: DashboardSettings::default(),
            portfolio: PortfolioSettings::default(),
        }
    }
}

/// Contains parameters for dashboard assembly.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    /// How many entries the recent-measurements window holds.
    #[serde(default = "default_recent_limit")]
    pub recent_measurements_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            recent_measurements_limit: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> usize {
    5
}

/// Contains parameters for the project registry.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioSettings {
    /// Whether newly created projects are seeded with the starter metric
    /// set for their project type.
    #[serde(default = "default_seed_templates")]
    pub seed_template_metrics: bool,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            seed_template_metrics: default_seed_templates(),
        }
    }
}

fn default_seed_templates() -> bool {
    true
}
