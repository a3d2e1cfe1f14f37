//! Service layer for project creation, lookup, and team resolution.

use crate::project::{
    domain::{
        NewProject, Progress, Project, ProjectDomainError, ProjectId, ProjectName, ProjectPatch,
        ProjectStatus, ProjectTemplate,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
    team_members: Vec<UserId>,
    template: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        team_members: impl IntoIterator<Item = UserId>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            team_members: team_members.into_iter().collect(),
            template: None,
        }
    }

    /// Sets the creation template by name (`web`, `mobile`, `ecommerce`,
    /// `migration`). A blank value means no template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Request payload for editing a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    name: Option<String>,
    description: Option<String>,
    status: Option<ProjectStatus>,
    progress: Option<i64>,
    team_members: Option<Vec<UserId>>,
}

impl UpdateProjectRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the progress percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: i64) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Replaces the team.
    #[must_use]
    pub fn with_team_members(mut self, team_members: impl IntoIterator<Item = UserId>) -> Self {
        self.team_members = Some(team_members.into_iter().collect());
        self
    }

    fn into_patch(self) -> Result<ProjectPatch, ProjectDomainError> {
        let Self {
            name,
            description,
            status,
            progress,
            team_members,
        } = self;
        let mut patch = ProjectPatch::new();
        if let Some(value) = name {
            patch = patch.with_name(ProjectName::new(value)?);
        }
        if let Some(value) = description {
            patch = patch.with_description(value)?;
        }
        if let Some(value) = status {
            patch = patch.with_status(value);
        }
        if let Some(value) = progress {
            patch = patch.with_progress(Progress::new(value)?);
        }
        if let Some(value) = team_members {
            patch = patch.with_team_members(value)?;
        }
        Ok(patch)
    }
}

/// Number of projects in each lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    /// Projects with work ongoing.
    pub active: usize,
    /// Paused projects.
    pub on_hold: usize,
    /// Finished projects.
    pub completed: usize,
}

impl StatusSummary {
    /// Counts projects by status.
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        projects
            .iter()
            .fold(Self::default(), |mut summary, project| {
                match project.status() {
                    ProjectStatus::Active => summary.active += 1,
                    ProjectStatus::OnHold => summary.on_hold += 1,
                    ProjectStatus::Completed => summary.completed += 1,
                }
                summary
            })
    }
}

/// Service-level errors for project catalogue operations.
#[derive(Debug, Error)]
pub enum ProjectDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Project repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// User repository lookup failed while resolving a team.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

/// Result type for project catalogue operations.
pub type ProjectDirectoryResult<T> = Result<T, ProjectDirectoryError>;

/// Project creation, lookup, and team resolution service.
#[derive(Clone)]
pub struct ProjectDirectory<P, U>
where
    P: ProjectRepository,
    U: UserRepository,
{
    projects: Arc<P>,
    users: Arc<U>,
}

impl<P, U> ProjectDirectory<P, U>
where
    P: ProjectRepository,
    U: UserRepository,
{
    /// Creates a new project directory service.
    #[must_use]
    pub const fn new(projects: Arc<P>, users: Arc<U>) -> Self {
        Self { projects, users }
    }

    /// Validates and stores a new project.
    ///
    /// New projects start `Active` with 0% progress.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDirectoryError::Domain`] when the name or description
    /// is blank, the team is empty, or the template is unknown; no store call
    /// is made in that case. Returns [`ProjectDirectoryError::Repository`]
    /// when persistence fails.
    pub async fn create(&self, request: CreateProjectRequest) -> ProjectDirectoryResult<Project> {
        let CreateProjectRequest {
            name,
            description,
            team_members,
            template,
        } = request;

        let mut new_project = NewProject::new(ProjectName::new(name)?, description, team_members)?;
        if let Some(raw) = template.filter(|value| !value.trim().is_empty()) {
            new_project = new_project.with_template(ProjectTemplate::try_from(raw.as_str())?);
        }

        let project = self.projects.create(&new_project).await?;
        tracing::info!(project_id = %project.id(), "project created");
        Ok(project)
    }

    /// Returns every project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDirectoryError::Repository`] when the lookup fails.
    pub async fn list(&self) -> ProjectDirectoryResult<Vec<Project>> {
        Ok(self.projects.list_all().await?)
    }

    /// Finds a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDirectoryError::Repository`] when the lookup fails.
    pub async fn find(&self, id: ProjectId) -> ProjectDirectoryResult<Option<Project>> {
        Ok(self.projects.find_by_id(id).await?)
    }

    /// Returns projects whose name or description contains `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDirectoryError::Repository`] when the lookup fails.
    pub async fn search(&self, query: &str) -> ProjectDirectoryResult<Vec<Project>> {
        let projects = self.projects.list_all().await?;
        Ok(projects
            .into_iter()
            .filter(|project| project.matches(query))
            .collect())
    }

    /// Counts projects by lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDirectoryError::Repository`] when the lookup fails.
    pub async fn status_summary(&self) -> ProjectDirectoryResult<StatusSummary> {
        let projects = self.projects.list_all().await?;
        Ok(StatusSummary::from_projects(&projects))
    }

    /// Applies a validated partial update.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDirectoryError::Domain`] for invalid replacement
    /// values, or [`ProjectDirectoryError::Repository`] when the project does
    /// not exist or persistence fails.
    pub async fn update(
        &self,
        id: ProjectId,
        request: UpdateProjectRequest,
    ) -> ProjectDirectoryResult<Project> {
        let patch = request.into_patch()?;
        let project = self.projects.update(id, &patch).await?;
        tracing::info!(project_id = %id, status = %project.status(), "project updated");
        Ok(project)
    }

    /// Removes a project, returning `false` when nothing was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDirectoryError::Repository`] when persistence fails.
    pub async fn delete(&self, id: ProjectId) -> ProjectDirectoryResult<bool> {
        Ok(self.projects.delete(id).await?)
    }

    /// Resolves a project's team to user records in team order.
    ///
    /// Members whose user record no longer exists are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] (wrapped) for an unknown
    /// project, or a repository error when either lookup fails.
    pub async fn team_members(&self, id: ProjectId) -> ProjectDirectoryResult<Vec<User>> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or(ProjectRepositoryError::NotFound(id))?;
        let users = self.users.list_all().await?;
        Ok(project
            .team_members()
            .iter()
            .filter_map(|member| users.iter().find(|user| user.id() == *member).cloned())
            .collect())
    }
}
