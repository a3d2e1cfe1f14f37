//! Task ordering engine behind the board view.
//!
//! [`TaskBoard`] keeps the authoritative task list of the active project and
//! mediates every mutation that changes a task's column or rank. Mutations
//! are confirm-then-apply: the record store is called first and the in-memory
//! list only ever receives the store's confirmed representation. A failed call
//! leaves the list untouched and raises a failure notice.
//!
//! Overlapping calls are not serialized. The state lock is released while a
//! store call is pending, so when two responses for the same task race, the
//! one applied last wins. Loads are the exception: only the response for the
//! most recently requested project is applied.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use tracing::instrument;

use super::columns::partition;
use super::{BoardColumn, BoardConfig, BoardSnapshot, TaskEdit, TaskFields};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Position, Task, TaskDomainError, TaskId, TaskPatch, TaskStatus},
    ports::{BoardNotice, BoardNotifier, TaskRepository, TaskRepositoryError},
};

const LOAD_FAILED: &str = "Failed to load board data. Please try again.";
const MOVED: &str = "Task moved successfully!";
const MOVE_FAILED: &str = "Failed to move task";
const CREATED: &str = "Task created successfully!";
const CREATE_FAILED: &str = "Failed to create task";
const UPDATED: &str = "Task updated successfully!";
const UPDATE_FAILED: &str = "Failed to update task";
const DELETED: &str = "Task deleted successfully!";
const DELETE_FAILED: &str = "Failed to delete task";

/// Whether the board holds usable data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// No project has been loaded yet.
    #[default]
    NoProject,
    /// The task list reflects the last successful load.
    Ready,
    /// The last load failed; the view should offer a retry.
    Failed {
        /// Message to show in the error view.
        message: String,
    },
}

/// Monotonic counter bumped whenever the task list changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardRevision(u64);

impl BoardRevision {
    /// Returns the raw counter.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// User decision on a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirmation {
    /// The user confirmed the action.
    Confirmed,
    /// The user cancelled the action.
    Declined,
}

/// Why a gesture left the board unchanged without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// A task was dropped onto itself.
    SameTask,
    /// A referenced task is not on the board.
    MissingTask,
    /// The task already sits in the target column.
    SameColumn,
    /// The store no longer has the task.
    NotFound,
    /// The edit would not change any field.
    NoChanges,
    /// The user declined the confirmation.
    Declined,
}

/// Result of a board gesture that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOutcome {
    /// The store confirmed the task and the board now shows it.
    Applied(Task),
    /// The store confirmed the task, but it left the board while the call
    /// was pending, so the board was not changed.
    Unlisted(Task),
    /// The store confirmed a delete.
    Removed {
        /// Deleted task identifier.
        id: TaskId,
        /// Whether the task was on the board when the delete was confirmed.
        was_present: bool,
    },
    /// Nothing was sent to the store, or the store reported the task gone.
    Skipped(SkipReason),
}

/// Errors returned by board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Input was rejected before any store call.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The board has no active project.
    #[error("no project is loaded on the board")]
    NoProject,

    /// Loading the task list failed.
    #[error("failed to load board data: {0}")]
    Load(#[source] TaskRepositoryError),

    /// The store rejected or could not complete a mutation.
    #[error("record store failure: {0}")]
    Store(#[source] TaskRepositoryError),
}

#[derive(Debug, Default)]
struct BoardState {
    project_id: Option<ProjectId>,
    requested: Option<ProjectId>,
    tasks: Vec<Task>,
    load_state: LoadState,
    dragged: Option<TaskId>,
    drop_target: Option<TaskId>,
}

impl BoardState {
    fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Replaces the entry with the confirmed task. Returns `false` when the
    /// task is no longer on the board.
    fn replace(&mut self, confirmed: Task) -> bool {
        let id = confirmed.id();
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .map(|slot| *slot = confirmed)
            .is_some()
    }

    fn clear_selectors(&mut self) {
        self.dragged = None;
        self.drop_target = None;
    }
}

/// Task ordering engine for one board view.
pub struct TaskBoard<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    notifier: Arc<dyn BoardNotifier>,
    config: BoardConfig,
    state: Mutex<BoardState>,
    revision: watch::Sender<BoardRevision>,
}

impl<R> TaskBoard<R>
where
    R: TaskRepository,
{
    /// Creates an empty board with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, notifier: Arc<dyn BoardNotifier>) -> Self {
        Self {
            repository,
            notifier,
            config: BoardConfig::default(),
            state: Mutex::new(BoardState::default()),
            revision: watch::Sender::new(BoardRevision::default()),
        }
    }

    /// Replaces the validation configuration.
    #[must_use]
    pub const fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the validation configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision = revision.next());
    }

    /// Subscribes to task list changes.
    ///
    /// The receiver observes a new [`BoardRevision`] after every load and
    /// every applied mutation. Drag selectors do not bump the revision.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BoardRevision> {
        self.revision.subscribe()
    }

    /// Returns the current revision.
    #[must_use]
    pub fn revision(&self) -> BoardRevision {
        *self.revision.borrow()
    }

    /// Fetches the tasks of `project_id` and makes it the active project.
    ///
    /// Switching to another project discards the previous list and clears
    /// the drag selectors. When a newer load for another project is started
    /// before this one returns, this response is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Load`] when the store call fails. The board then
    /// reports [`LoadState::Failed`] with an empty task list.
    #[instrument(skip_all, fields(project_id = %project_id))]
    pub async fn load_tasks(&self, project_id: ProjectId) -> Result<(), BoardError> {
        self.state().requested = Some(project_id);
        let result = self.repository.list_by_project(project_id).await;
        let mut state = self.state();
        if state.requested != Some(project_id) {
            tracing::debug!("load superseded by a newer project request");
            return Ok(());
        }
        if state.project_id != Some(project_id) {
            state.clear_selectors();
        }
        state.project_id = Some(project_id);
        match result {
            Ok(tasks) => {
                tracing::info!(task_count = tasks.len(), "board loaded");
                state.tasks = tasks;
                state.load_state = LoadState::Ready;
                drop(state);
                self.bump();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "board load failed");
                state.tasks.clear();
                state.load_state = LoadState::Failed {
                    message: LOAD_FAILED.to_owned(),
                };
                drop(state);
                self.bump();
                Err(BoardError::Load(err))
            }
        }
    }

    /// Re-runs the load for the active project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoProject`] when nothing was ever loaded, or
    /// [`BoardError::Load`] when the store call fails again.
    pub async fn retry_load(&self) -> Result<(), BoardError> {
        let project_id = self.state().project_id.ok_or(BoardError::NoProject)?;
        self.load_tasks(project_id).await
    }

    /// Returns the active project, if any.
    #[must_use]
    pub fn project_id(&self) -> Option<ProjectId> {
        self.state().project_id
    }

    /// Returns the load state.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.state().load_state.clone()
    }

    /// Returns the task list in load order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.state().tasks.clone()
    }

    /// Returns a task on the board by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.state().find(id).cloned()
    }

    /// Returns the three status columns, each ordered by position.
    #[must_use]
    pub fn columns(&self) -> Vec<BoardColumn> {
        partition(&self.state().tasks, |_| true)
    }

    /// Returns the columns restricted to tasks whose title, description, or
    /// assignee name contains `query`, ignoring case.
    #[must_use]
    pub fn columns_matching(&self, query: &str) -> Vec<BoardColumn> {
        partition(&self.state().tasks, |task| task.matches(query))
    }

    /// Returns a consistent view of columns, load state, and selectors.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let revision = self.revision();
        let state = self.state();
        BoardSnapshot {
            project_id: state.project_id,
            load_state: state.load_state.clone(),
            columns: partition(&state.tasks, |_| true),
            dragged: state.dragged,
            drop_target: state.drop_target,
            revision,
        }
    }

    /// Marks `task_id` as the drag source.
    pub fn begin_drag(&self, task_id: TaskId) {
        self.state().dragged = Some(task_id);
    }

    /// Clears the drag source and the hovered target. Safe to call when no
    /// drag is active.
    pub fn end_drag(&self) {
        self.state().clear_selectors();
    }

    /// Marks `task_id` as the hovered drop target.
    pub fn hover(&self, task_id: TaskId) {
        self.state().drop_target = Some(task_id);
    }

    /// Clears the hovered drop target.
    pub fn clear_hover(&self) {
        self.state().drop_target = None;
    }

    /// Returns the drag source, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<TaskId> {
        self.state().dragged
    }

    /// Returns the hovered drop target, if any.
    #[must_use]
    pub fn drop_target(&self) -> Option<TaskId> {
        self.state().drop_target
    }

    /// Moves `dragged` into the slot of `target`.
    ///
    /// The dragged task takes the target's status and position; the target
    /// and every other task keep theirs. Both tasks must be on the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the update fails; the board is left
    /// unchanged and a failure notice is raised.
    #[instrument(skip_all, fields(dragged = %dragged, target = %target))]
    pub async fn drop_on_task(
        &self,
        dragged: TaskId,
        target: TaskId,
    ) -> Result<BoardOutcome, BoardError> {
        if dragged == target {
            tracing::debug!("dropped onto itself");
            return Ok(BoardOutcome::Skipped(SkipReason::SameTask));
        }
        let slot = {
            let state = self.state();
            state
                .find(dragged)
                .and(state.find(target))
                .map(|task| (task.status(), task.position()))
        };
        let Some((status, position)) = slot else {
            tracing::debug!("drop references a task that is not on the board");
            return Ok(BoardOutcome::Skipped(SkipReason::MissingTask));
        };

        let patch = TaskPatch::new()
            .with_status(status)
            .with_position(position);
        self.commit_update(dragged, &patch, MOVED.to_owned(), MOVE_FAILED)
            .await
    }

    /// Moves `dragged` to the `status` column, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the update fails; the board is left
    /// unchanged and a failure notice is raised.
    #[instrument(skip_all, fields(dragged = %dragged, status = %status))]
    pub async fn drop_on_column(
        &self,
        dragged: TaskId,
        status: TaskStatus,
    ) -> Result<BoardOutcome, BoardError> {
        let current = self.state().find(dragged).map(Task::status);
        match current {
            None => {
                tracing::debug!("dragged task is not on the board");
                return Ok(BoardOutcome::Skipped(SkipReason::MissingTask));
            }
            Some(existing) if existing == status => {
                tracing::debug!("task already in column");
                return Ok(BoardOutcome::Skipped(SkipReason::SameColumn));
            }
            Some(_) => {}
        }

        let patch = TaskPatch::new().with_status(status);
        let success = format!("Task moved to {}!", status.title());
        self.commit_update(dragged, &patch, success, MOVE_FAILED)
            .await
    }

    /// Creates a task at the end of the `status` column of the active
    /// project.
    ///
    /// The new position is one past the largest position in that column, or
    /// [`Position::FIRST`] when the column is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for invalid fields or a column whose
    /// last position has no successor, and [`BoardError::NoProject`] when
    /// nothing is loaded; none of these reach the store. Returns
    /// [`BoardError::Store`] when the create fails.
    #[instrument(skip_all, fields(status = %status))]
    pub async fn create_task(
        &self,
        status: TaskStatus,
        fields: TaskFields,
    ) -> Result<BoardOutcome, BoardError> {
        let (project_id, position) = {
            let state = self.state();
            let project_id = state.project_id.ok_or(BoardError::NoProject)?;
            let position = Position::after_last(
                state
                    .tasks
                    .iter()
                    .filter(|task| task.status() == status)
                    .map(Task::position),
            )?;
            (project_id, position)
        };
        let new_task = fields.into_new_task(project_id, status, position, &self.config)?;

        match self.repository.create(&new_task).await {
            Ok(created) => {
                let appended = {
                    let mut state = self.state();
                    let active = state.project_id == Some(created.project_id());
                    if active {
                        state.tasks.push(created.clone());
                    }
                    active
                };
                tracing::info!(task_id = %created.id(), position = %created.position(), appended, "task created");
                self.notifier.notify(BoardNotice::success(CREATED));
                if appended {
                    self.bump();
                    Ok(BoardOutcome::Applied(created))
                } else {
                    Ok(BoardOutcome::Unlisted(created))
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "task create failed");
                self.notifier.notify(BoardNotice::failure(CREATE_FAILED));
                Err(BoardError::Store(err))
            }
        }
    }

    /// Applies an edit to a task on the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for invalid fields before any store
    /// call, or [`BoardError::Store`] when the update fails.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn edit_task(&self, id: TaskId, edit: TaskEdit) -> Result<BoardOutcome, BoardError> {
        let patch = edit.into_patch(&self.config)?;
        let changes = self.state().find(id).map(|task| patch.changes(task));
        match changes {
            None => {
                tracing::debug!("edited task is not on the board");
                Ok(BoardOutcome::Skipped(SkipReason::MissingTask))
            }
            Some(false) => {
                tracing::debug!("edit changes nothing");
                Ok(BoardOutcome::Skipped(SkipReason::NoChanges))
            }
            Some(true) => {
                self.commit_update(id, &patch, UPDATED.to_owned(), UPDATE_FAILED)
                    .await
            }
        }
    }

    /// Deletes a task once the user has confirmed.
    ///
    /// A confirmed delete is always sent to the store, even for a task that
    /// is not on the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the delete fails; the board is left
    /// unchanged and a failure notice is raised.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn delete_task(
        &self,
        id: TaskId,
        confirmation: Confirmation,
    ) -> Result<BoardOutcome, BoardError> {
        if confirmation == Confirmation::Declined {
            tracing::debug!("delete declined");
            return Ok(BoardOutcome::Skipped(SkipReason::Declined));
        }

        match self.repository.delete(id).await {
            Ok(existed) => {
                let was_present = {
                    let mut state = self.state();
                    let before = state.tasks.len();
                    state.tasks.retain(|task| task.id() != id);
                    if state.dragged == Some(id) || state.drop_target == Some(id) {
                        state.clear_selectors();
                    }
                    state.tasks.len() != before
                };
                if was_present {
                    self.bump();
                }
                tracing::info!(existed, was_present, "task deleted");
                self.notifier.notify(BoardNotice::success(DELETED));
                Ok(BoardOutcome::Removed { id, was_present })
            }
            Err(err) => {
                tracing::warn!(error = %err, "task delete failed");
                self.notifier.notify(BoardNotice::failure(DELETE_FAILED));
                Err(BoardError::Store(err))
            }
        }
    }

    async fn commit_update(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        success: String,
        failure: &str,
    ) -> Result<BoardOutcome, BoardError> {
        match self.repository.update(id, patch).await {
            Ok(confirmed) => {
                let replaced = self.state().replace(confirmed.clone());
                tracing::info!(
                    task_id = %id,
                    status = %confirmed.status(),
                    position = %confirmed.position(),
                    replaced,
                    "task updated"
                );
                self.notifier.notify(BoardNotice::success(success));
                if replaced {
                    self.bump();
                    Ok(BoardOutcome::Applied(confirmed))
                } else {
                    Ok(BoardOutcome::Unlisted(confirmed))
                }
            }
            Err(TaskRepositoryError::NotFound(_)) => {
                tracing::debug!(task_id = %id, "task no longer exists in the store");
                Ok(BoardOutcome::Skipped(SkipReason::NotFound))
            }
            Err(err) => {
                tracing::warn!(task_id = %id, error = %err, "task update failed");
                self.notifier.notify(BoardNotice::failure(failure));
                Err(BoardError::Store(err))
            }
        }
    }
}
