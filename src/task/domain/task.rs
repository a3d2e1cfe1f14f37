//! Task record and its create/update payloads.

use super::{Position, TaskDomainError, TaskId, TaskStatus, TaskTitle};
use crate::project::domain::ProjectId;
use crate::user::domain::{User, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// User a task is assigned to, with denormalized display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    user_id: UserId,
    name: String,
    avatar: Option<String>,
}

impl Assignee {
    /// Creates an assignee reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyAssigneeName`] for a blank name.
    pub fn new(user_id: UserId, name: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyAssigneeName);
        }
        Ok(Self {
            user_id,
            name: trimmed.to_owned(),
            avatar: None,
        })
    }

    /// Sets the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Builds the reference from a user record.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id(),
            name: user.name().as_str().to_owned(),
            avatar: user.avatar().map(str::to_owned),
        }
    }

    /// Returns the assigned user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar reference, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

/// A task as confirmed by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    position: Position,
    assignee: Option<Assignee>,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted column.
    pub status: TaskStatus,
    /// Persisted rank within the column.
    pub position: Position,
    /// Persisted assignee.
    pub assignee: Option<Assignee>,
    /// Persisted due date.
    pub due_date: Option<NaiveDate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materializes a newly created task with store-assigned identity and
    /// timestamps.
    #[must_use]
    pub fn from_new(id: TaskId, new_task: &NewTask, now: DateTime<Utc>) -> Self {
        Self {
            id,
            project_id: new_task.project_id,
            title: new_task.title.clone(),
            description: new_task.description.clone(),
            status: new_task.status,
            position: new_task.position,
            assignee: new_task.assignee.clone(),
            due_date: new_task.due_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            position: data.position,
            assignee: data.assignee,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the rank within the column.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the task is assigned to `user_id`.
    #[must_use]
    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.assignee
            .as_ref()
            .is_some_and(|assignee| assignee.user_id == user_id)
    }

    /// Returns `true` when the due date is strictly before `today` and the
    /// task is not done.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TaskStatus::Done && self.due_date.is_some_and(|due| due < today)
    }

    /// Returns `true` when the title, description, or assignee name contains
    /// `query`, ignoring case. An empty query matches every task.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.title.as_str().to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .assignee
                .as_ref()
                .is_some_and(|assignee| assignee.name.to_lowercase().contains(&needle))
    }

    /// Merges a partial update and stamps the update time.
    pub fn apply(&mut self, patch: &TaskPatch, now: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(assignee) = &patch.assignee {
            self.assignee.clone_from(assignee);
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        self.updated_at = now;
    }
}

/// Validated fields for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    project_id: ProjectId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    position: Position,
    assignee: Option<Assignee>,
    due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Creates a new-task payload with an empty description and no assignee.
    #[must_use]
    pub const fn new(
        project_id: ProjectId,
        title: TaskTitle,
        status: TaskStatus,
        position: Position,
    ) -> Self {
        Self {
            project_id,
            title,
            description: String::new(),
            status,
            position,
            assignee: None,
            due_date: None,
        }
    }

    /// Sets the description; surrounding whitespace is trimmed.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_owned();
        self
    }

    /// Sets or clears the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Option<Assignee>) -> Self {
        self.assignee = assignee;
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the target column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the initial rank.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

/// Partial update of a task; `None` fields are left untouched.
///
/// Assignee and due date use a nested `Option` so a patch can clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    description: Option<String>,
    status: Option<TaskStatus>,
    position: Option<Position>,
    assignee: Option<Option<Assignee>>,
    due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the description; surrounding whitespace is trimmed.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into().trim().to_owned());
        self
    }

    /// Moves the task to another column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Changes the rank within the column.
    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
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

    /// Returns the replacement title, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement column, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the replacement rank, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the assignee change, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Option<Assignee>> {
        self.assignee.as_ref()
    }

    /// Returns the due date change, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<Option<NaiveDate>> {
        self.due_date
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.position.is_none()
            && self.assignee.is_none()
            && self.due_date.is_none()
    }

    /// Returns `true` when applying the patch to `task` would change at
    /// least one field.
    #[must_use]
    pub fn changes(&self, task: &Task) -> bool {
        self.title.as_ref().is_some_and(|title| *title != task.title)
            || self
                .description
                .as_ref()
                .is_some_and(|description| *description != task.description)
            || self.status.is_some_and(|status| status != task.status)
            || self.position.is_some_and(|position| position != task.position)
            || self
                .assignee
                .as_ref()
                .is_some_and(|assignee| *assignee != task.assignee)
            || self.due_date.is_some_and(|due_date| due_date != task.due_date)
    }
}
