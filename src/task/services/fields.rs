//! User-entered task fields for create and edit gestures.

use super::BoardConfig;
use crate::project::domain::ProjectId;
use crate::task::domain::{
    Assignee, NewTask, Position, TaskDomainError, TaskPatch, TaskStatus, TaskTitle,
};
use chrono::NaiveDate;

/// Fields entered when creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    title: String,
    description: String,
    assignee: Option<Assignee>,
    due_date: Option<NaiveDate>,
}

impl TaskFields {
    /// Creates fields with a title and nothing else.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            assignee: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Assignee) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub(super) fn into_new_task(
        self,
        project_id: ProjectId,
        status: TaskStatus,
        position: Position,
        config: &BoardConfig,
    ) -> Result<NewTask, TaskDomainError> {
        let title = TaskTitle::bounded(self.title, config.max_title_length)?;
        Ok(NewTask::new(project_id, title, status, position)
            .with_description(self.description)
            .with_assignee(self.assignee)
            .with_due_date(self.due_date))
    }
}

/// Fields changed by an edit; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    title: Option<String>,
    description: Option<String>,
    assignee: Option<Option<Assignee>>,
    due_date: Option<Option<NaiveDate>>,
}

impl TaskEdit {
    /// Creates an edit that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces or clears the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Option<Assignee>) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Replaces or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub(super) fn into_patch(self, config: &BoardConfig) -> Result<TaskPatch, TaskDomainError> {
        let Self {
            title,
            description,
            assignee,
            due_date,
        } = self;
        let mut patch = TaskPatch::new();
        if let Some(value) = title {
            patch = patch.with_title(TaskTitle::bounded(value, config.max_title_length)?);
        }
        if let Some(value) = description {
            patch = patch.with_description(value);
        }
        if let Some(value) = assignee {
            patch = patch.with_assignee(value);
        }
        if let Some(value) = due_date {
            patch = patch.with_due_date(value);
        }
        Ok(patch)
    }
}
