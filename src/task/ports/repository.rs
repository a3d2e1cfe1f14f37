//! Repository port for task persistence and lookup.

use crate::project::domain::ProjectId;
use crate::store::BlockingError;
use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Listings are returned in identifier order, which is also creation order.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks belonging to a project.
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks assigned to a user.
    async fn list_by_assignee(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task; the store assigns identity and timestamps.
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Merges a partial update and returns the confirmed record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task>;

    /// Deletes a task, returning `false` when nothing was removed.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<BlockingError> for TaskRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}
