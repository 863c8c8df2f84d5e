use core_types::CoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Project {0} not found in registry")]
    ProjectNotFound(Uuid),

    #[error(transparent)]
    Core(#[from] CoreError),
}
