//! Report service reading all three repositories.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use super::{BoardStats, TeamWorkload};
use crate::project::ports::{ProjectRepository, ProjectRepositoryError};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::user::ports::{UserRepository, UserRepositoryError};

/// Errors returned while assembling a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Project lookup failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

/// Builds completion and workload reports.
pub struct ReportService<T, P, U>
where
    T: TaskRepository,
    P: ProjectRepository,
    U: UserRepository,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    users: Arc<U>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl<T, P, U> ReportService<T, P, U>
where
    T: TaskRepository,
    P: ProjectRepository,
    U: UserRepository,
{
    /// Creates a report service.
    #[must_use]
    pub fn new(
        tasks: Arc<T>,
        projects: Arc<P>,
        users: Arc<U>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            tasks,
            projects,
            users,
            clock,
        }
    }

    /// Computes whole-board statistics as of today.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] naming the repository whose lookup failed.
    pub async fn board_stats(&self) -> Result<BoardStats, ReportError> {
        let today = self.clock.utc().date_naive();
        let (tasks, projects, users) = tokio::try_join!(
            async { self.tasks.list_all().await.map_err(ReportError::from) },
            async { self.projects.list_all().await.map_err(ReportError::from) },
            async { self.users.list_all().await.map_err(ReportError::from) },
        )?;
        let stats = BoardStats::compute(&tasks, projects.len(), &users, today);
        tracing::debug!(
            total_tasks = stats.total_tasks(),
            completion_rate = stats.completion_rate,
            overdue = stats.overdue,
            "board stats computed"
        );
        Ok(stats)
    }

    /// Computes the workload of every user.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] naming the repository whose lookup failed.
    pub async fn team_workload(&self) -> Result<TeamWorkload, ReportError> {
        let (tasks, users) = tokio::try_join!(
            async { self.tasks.list_all().await.map_err(ReportError::from) },
            async { self.users.list_all().await.map_err(ReportError::from) },
        )?;
        Ok(TeamWorkload::compute(&tasks, &users))
    }
}
