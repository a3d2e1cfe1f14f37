//! Column partition of the active project's tasks.

use super::{BoardRevision, LoadState};
use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskId, TaskStatus};

/// One status column with its tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl BoardColumn {
    /// Returns the column status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.status.title()
    }

    /// Returns the tasks ordered by ascending position.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task identifiers in display order.
    #[must_use]
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(Task::id).collect()
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Groups `tasks` into the three status columns.
///
/// Each column is stable-sorted by position, so tasks sharing a position keep
/// their list order. Stored positions are never modified.
pub(super) fn partition(tasks: &[Task], keep: impl Fn(&Task) -> bool) -> Vec<BoardColumn> {
    TaskStatus::ALL
        .into_iter()
        .map(|status| {
            let mut column_tasks: Vec<Task> = tasks
                .iter()
                .filter(|task| task.status() == status && keep(task))
                .cloned()
                .collect();
            column_tasks.sort_by_key(Task::position);
            BoardColumn {
                status,
                tasks: column_tasks,
            }
        })
        .collect()
}

/// Read-only view of the board for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub(super) project_id: Option<ProjectId>,
    pub(super) load_state: LoadState,
    pub(super) columns: Vec<BoardColumn>,
    pub(super) dragged: Option<TaskId>,
    pub(super) drop_target: Option<TaskId>,
    pub(super) revision: BoardRevision,
}

impl BoardSnapshot {
    /// Returns the active project, if one has been loaded.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the load state.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn dragged(&self) -> Option<TaskId> {
        self.dragged
    }

    /// Returns the hovered drop target, if any.
    #[must_use]
    pub const fn drop_target(&self) -> Option<TaskId> {
        self.drop_target
    }

    /// Returns the task list revision the snapshot was taken at.
    #[must_use]
    pub const fn revision(&self) -> BoardRevision {
        self.revision
    }
}
