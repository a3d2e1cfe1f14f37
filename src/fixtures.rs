//! JSON seed data for the in-memory record store.
//!
//! Fixture files use the board's interchange field names (`Id`,
//! `projectId`, `assigneeId`, `dueDate`) and are normalized here into
//! validated domain records through the same constructors the services use.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::Deserialize;
use thiserror::Error;

use crate::project::adapters::memory::InMemoryProjectRepository;
use crate::project::domain::{
    ParseProjectStatusError, PersistedProjectData, Progress, Project, ProjectDomainError,
    ProjectId, ProjectName, ProjectStatus, ProjectTemplate,
};
use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::domain::{
    Assignee, ParseTaskStatusError, PersistedTaskData, Position, Task, TaskDomainError, TaskId,
    TaskStatus, TaskTitle,
};
use crate::user::adapters::memory::InMemoryUserRepository;
use crate::user::domain::{EmailAddress, User, UserDomainError, UserId, UserName};

/// Errors raised while loading fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture is not valid JSON or has the wrong shape.
    #[error("malformed fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// A user record failed validation.
    #[error("invalid user {id}: {source}")]
    User {
        /// Offending record identifier.
        id: i64,
        /// Validation failure.
        #[source]
        source: UserDomainError,
    },

    /// A project record failed validation.
    #[error("invalid project {id}: {source}")]
    Project {
        /// Offending record identifier.
        id: i64,
        /// Validation failure.
        #[source]
        source: ProjectDomainError,
    },

    /// A project status could not be parsed.
    #[error("invalid project {id}: {source}")]
    ProjectStatus {
        /// Offending record identifier.
        id: i64,
        /// Parse failure.
        #[source]
        source: ParseProjectStatusError,
    },

    /// A task record failed validation.
    #[error("invalid task {id}: {source}")]
    Task {
        /// Offending record identifier.
        id: i64,
        /// Validation failure.
        #[source]
        source: TaskDomainError,
    },

    /// A task status could not be parsed.
    #[error("invalid task {id}: {source}")]
    TaskStatus {
        /// Offending record identifier.
        id: i64,
        /// Parse failure.
        #[source]
        source: ParseTaskStatusError,
    },

    /// A task is assigned to a user the fixture does not define.
    #[error("task {task} is assigned to unknown user {user}")]
    UnknownAssignee {
        /// Offending task identifier.
        task: i64,
        /// Missing user identifier.
        user: i64,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(rename = "Id")]
    id: i64,
    name: String,
    email: String,
    #[serde(default)]
    avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord {
    #[serde(rename = "Id")]
    id: i64,
    name: String,
    #[serde(default)]
    description: String,
    status: String,
    #[serde(default)]
    progress: i64,
    #[serde(default)]
    team_members: Vec<i64>,
    #[serde(default)]
    template: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    #[serde(rename = "Id")]
    id: i64,
    project_id: i64,
    title: String,
    #[serde(default)]
    description: String,
    status: String,
    position: i64,
    #[serde(default)]
    assignee_id: Option<i64>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
struct FixtureDocument {
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
    #[serde(default)]
    tasks: Vec<TaskRecord>,
}

/// Validated users, projects, and tasks loaded from a fixture document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFixture {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

impl BoardFixture {
    /// Parses and validates a fixture document.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Json`] for malformed JSON and the matching
    /// record variant when a user, project, or task fails validation.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let document: FixtureDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Reads, parses, and validates a fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] when the file cannot be read, otherwise
    /// see [`BoardFixture::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn from_document(document: FixtureDocument) -> Result<Self, FixtureError> {
        let users = document
            .users
            .into_iter()
            .map(user_from_record)
            .collect::<Result<Vec<_>, _>>()?;
        let projects = document
            .projects
            .into_iter()
            .map(project_from_record)
            .collect::<Result<Vec<_>, _>>()?;
        let directory: HashMap<UserId, &User> =
            users.iter().map(|user| (user.id(), user)).collect();
        let tasks = document
            .tasks
            .into_iter()
            .map(|record| task_from_record(record, &directory))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            users = users.len(),
            projects = projects.len(),
            tasks = tasks.len(),
            "fixture loaded"
        );
        Ok(Self {
            users,
            projects,
            tasks,
        })
    }

    /// Returns the fixture users.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the fixture projects.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns the fixture tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Builds an in-memory user repository holding the fixture users.
    #[must_use]
    pub fn user_repository(&self) -> InMemoryUserRepository {
        InMemoryUserRepository::with_users(self.users.iter().cloned())
    }

    /// Builds an in-memory project repository holding the fixture projects.
    #[must_use]
    pub fn project_repository(
        &self,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> InMemoryProjectRepository {
        InMemoryProjectRepository::with_clock(clock).seeded(self.projects.iter().cloned())
    }

    /// Builds an in-memory task repository holding the fixture tasks.
    #[must_use]
    pub fn task_repository(&self, clock: Arc<dyn Clock + Send + Sync>) -> InMemoryTaskRepository {
        InMemoryTaskRepository::with_clock(clock).seeded(self.tasks.iter().cloned())
    }
}

fn user_from_record(record: UserRecord) -> Result<User, FixtureError> {
    let id = record.id;
    let invalid = |source| FixtureError::User { id, source };
    let name = UserName::new(record.name).map_err(invalid)?;
    let email = EmailAddress::new(record.email).map_err(invalid)?;
    Ok(User::from_persisted(UserId::new(id), name, email, record.avatar))
}

fn project_from_record(record: ProjectRecord) -> Result<Project, FixtureError> {
    let id = record.id;
    let invalid = |source| FixtureError::Project { id, source };
    let status = ProjectStatus::try_from(record.status.as_str())
        .map_err(|source| FixtureError::ProjectStatus { id, source })?;
    let template = record
        .template
        .as_deref()
        .map(ProjectTemplate::try_from)
        .transpose()
        .map_err(invalid)?;
    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(id),
        name: ProjectName::new(record.name).map_err(invalid)?,
        description: record.description,
        status,
        progress: Progress::new(record.progress).map_err(invalid)?,
        team_members: record.team_members.into_iter().map(UserId::new).collect(),
        template,
        created_at: record.created_at,
        updated_at: record.updated_at.unwrap_or(record.created_at),
    }))
}

fn task_from_record(
    record: TaskRecord,
    directory: &HashMap<UserId, &User>,
) -> Result<Task, FixtureError> {
    let id = record.id;
    let invalid = |source| FixtureError::Task { id, source };
    let status = TaskStatus::try_from(record.status.as_str())
        .map_err(|source| FixtureError::TaskStatus { id, source })?;
    let assignee = record
        .assignee_id
        .map(|user| {
            directory
                .get(&UserId::new(user))
                .map(|found| Assignee::from_user(found))
                .ok_or(FixtureError::UnknownAssignee { task: id, user })
        })
        .transpose()?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        project_id: ProjectId::new(record.project_id),
        title: TaskTitle::new(record.title).map_err(invalid)?,
        description: record.description.trim().to_owned(),
        status,
        position: Position::new(record.position).map_err(invalid)?,
        assignee,
        due_date: record.due_date,
        created_at: record.created_at,
        updated_at: record.updated_at.unwrap_or(record.created_at),
    }))
}
