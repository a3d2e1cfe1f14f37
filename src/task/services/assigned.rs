//! Tasks assigned to one user, across projects.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

use super::BoardConfig;
use crate::task::{
    domain::{DueBadge, Task, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::domain::UserId;

/// Status tab applied to an assigned-task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every status.
    #[default]
    All,
    /// One status only.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns `true` when a task with `status` passes the filter.
    #[must_use]
    pub fn accepts(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = crate::task::domain::ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TaskStatus::try_from(value).map(Self::Only)
    }
}

/// Number of tasks per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Not started.
    pub todo: usize,
    /// Being worked on.
    pub in_progress: usize,
    /// Finished.
    pub done: usize,
}

impl StatusCounts {
    /// Counts `tasks` by status.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut counts, task| {
            match task.status() {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Done => counts.done += 1,
            }
            counts
        })
    }

    /// Returns the number of tasks across all statuses.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.todo
            .saturating_add(self.in_progress)
            .saturating_add(self.done)
    }

    /// Returns the count shown on a filter tab.
    #[must_use]
    pub const fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total(),
            StatusFilter::Only(TaskStatus::Todo) => self.todo,
            StatusFilter::Only(TaskStatus::InProgress) => self.in_progress,
            StatusFilter::Only(TaskStatus::Done) => self.done,
        }
    }
}

/// An assigned task with its due-date badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedTask {
    task: Task,
    due_badge: Option<DueBadge>,
}

impl AssignedTask {
    /// Returns the task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the due-date badge, or `None` when the task has no due date.
    #[must_use]
    pub const fn due_badge(&self) -> Option<DueBadge> {
        self.due_badge
    }
}

/// Errors returned while listing assigned tasks.
#[derive(Debug, Error)]
pub enum AssignedTasksError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// "My tasks" listing service.
pub struct AssignedTasks<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    clock: Arc<dyn Clock + Send + Sync>,
    config: BoardConfig,
}

impl<R> AssignedTasks<R>
where
    R: TaskRepository,
{
    /// Creates the service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            repository,
            clock,
            config: BoardConfig::default(),
        }
    }

    /// Replaces the configuration used for due-date badges.
    #[must_use]
    pub const fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    /// Lists the tasks assigned to `user_id` that pass `filter`, in store
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`AssignedTasksError::Repository`] when the lookup fails.
    pub async fn list(
        &self,
        user_id: UserId,
        filter: StatusFilter,
    ) -> Result<Vec<AssignedTask>, AssignedTasksError> {
        let today = self.today();
        let soon_days = self.config.due_soon_days;
        let tasks = self.repository.list_by_assignee(user_id).await?;
        Ok(tasks
            .into_iter()
            .filter(|task| filter.accepts(task.status()))
            .map(|task| AssignedTask {
                due_badge: task
                    .due_date()
                    .map(|due| DueBadge::classify(due, today, soon_days)),
                task,
            })
            .collect())
    }

    /// Counts the tasks assigned to `user_id` by status.
    ///
    /// # Errors
    ///
    /// Returns [`AssignedTasksError::Repository`] when the lookup fails.
    pub async fn counts(&self, user_id: UserId) -> Result<StatusCounts, AssignedTasksError> {
        let tasks = self.repository.list_by_assignee(user_id).await?;
        Ok(StatusCounts::from_tasks(&tasks))
    }
}
