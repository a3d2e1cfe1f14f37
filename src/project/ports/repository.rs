//! Repository port for project persistence.

use crate::project::domain::{NewProject, Project, ProjectId, ProjectPatch};
use crate::store::BlockingError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every project ordered by identifier.
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Stores a new project; the store assigns identity and timestamps.
    async fn create(&self, project: &NewProject) -> ProjectRepositoryResult<Project>;

    /// Merges a partial update and returns the confirmed record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist.
    async fn update(&self, id: ProjectId, patch: &ProjectPatch) -> ProjectRepositoryResult<Project>;

    /// Deletes a project, returning `false` when nothing was removed.
    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<bool>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<BlockingError> for ProjectRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}
