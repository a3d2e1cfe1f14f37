//! In-memory repository for board tasks.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory task repository.
///
/// Identifiers continue from the largest stored identifier.
#[derive(Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<BTreeMap<TaskId, Task>>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository using the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }

    /// Replaces the stored records with `tasks`.
    #[must_use]
    pub fn seeded(self, tasks: impl IntoIterator<Item = Task>) -> Self {
        let records = tasks.into_iter().map(|task| (task.id(), task)).collect();
        Self {
            state: Arc::new(RwLock::new(records)),
            clock: self.clock,
        }
    }

    fn filtered(&self, keep: impl Fn(&Task) -> bool) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.values().filter(|task| keep(task)).cloned().collect())
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryTaskRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryTaskRepository")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn poisoned(err: &impl fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(format!("lock poisoned: {err}")))
}

fn identifiers_exhausted() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("no task identifier is left after the largest stored one"))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.filtered(|_| true)
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        self.filtered(|task| task.project_id() == project_id)
    }

    async fn list_by_assignee(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.filtered(|task| task.is_assigned_to(user_id))
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.get(&id).cloned())
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let next_id = state
            .keys()
            .next_back()
            .map_or(Some(1), |last| last.value().checked_add(1))
            .ok_or_else(identifiers_exhausted)?;
        let created = Task::from_new(TaskId::new(next_id), task, self.clock.utc());
        state.insert(created.id(), created.clone());
        Ok(created)
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let task = state.get_mut(&id).ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(patch, self.clock.utc());
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        Ok(state.remove(&id).is_some())
    }
}
