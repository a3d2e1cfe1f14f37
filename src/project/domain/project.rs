//! Project record and its create/update payloads.

use super::{Progress, ProjectDomainError, ProjectId, ProjectName, ProjectStatus, ProjectTemplate};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project as confirmed by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: String,
    status: ProjectStatus,
    progress: Progress,
    team_members: Vec<UserId>,
    template: Option<ProjectTemplate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: ProjectName,
    /// Persisted description.
    pub description: String,
    /// Persisted lifecycle status.
    pub status: ProjectStatus,
    /// Persisted progress percentage.
    pub progress: Progress,
    /// Persisted team member identifiers.
    pub team_members: Vec<UserId>,
    /// Persisted creation template, if any.
    pub template: Option<ProjectTemplate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Materializes a newly created project with store-assigned identity and
    /// timestamps.
    #[must_use]
    pub fn from_new(id: ProjectId, new_project: &NewProject, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_project.name.clone(),
            description: new_project.description.clone(),
            status: new_project.status,
            progress: new_project.progress,
            team_members: new_project.team_members.clone(),
            template: new_project.template,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            status: data.status,
            progress: data.progress,
            team_members: data.team_members,
            template: data.template,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the progress percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the team member identifiers in assignment order.
    #[must_use]
    pub fn team_members(&self) -> &[UserId] {
        &self.team_members
    }

    /// Returns the creation template, if any.
    #[must_use]
    pub const fn template(&self) -> Option<ProjectTemplate> {
        self.template
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

    /// Returns `true` when the name or description contains `query`,
    /// ignoring case. An empty query matches every project.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.as_str().to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    /// Merges a partial update and stamps the update time.
    pub fn apply(&mut self, patch: &ProjectPatch, now: DateTime<Utc>) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(team_members) = &patch.team_members {
            self.team_members.clone_from(team_members);
        }
        if let Some(template) = patch.template {
            self.template = template;
        }
        self.updated_at = now;
    }
}

/// Validated fields for a project that has not been stored yet.
///
/// New projects start [`ProjectStatus::Active`] with no progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    name: ProjectName,
    description: String,
    status: ProjectStatus,
    progress: Progress,
    team_members: Vec<UserId>,
    template: Option<ProjectTemplate>,
}

impl NewProject {
    /// Creates a validated new-project payload.
    ///
    /// Duplicate team member identifiers are collapsed, keeping the first
    /// occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyDescription`] for a blank
    /// description or [`ProjectDomainError::NoTeamMembers`] for an empty team.
    pub fn new(
        name: ProjectName,
        description: impl Into<String>,
        team_members: impl IntoIterator<Item = UserId>,
    ) -> Result<Self, ProjectDomainError> {
        let description_text = validate_description(description.into())?;
        let members = validate_team(team_members)?;
        Ok(Self {
            name,
            description: description_text,
            status: ProjectStatus::Active,
            progress: Progress::NONE,
            team_members: members,
            template: None,
        })
    }

    /// Sets the creation template.
    #[must_use]
    pub const fn with_template(mut self, template: ProjectTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the initial progress.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the team member identifiers.
    #[must_use]
    pub fn team_members(&self) -> &[UserId] {
        &self.team_members
    }

    /// Returns the creation template, if any.
    #[must_use]
    pub const fn template(&self) -> Option<ProjectTemplate> {
        self.template
    }
}

/// Partial update of a project; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    name: Option<ProjectName>,
    description: Option<String>,
    status: Option<ProjectStatus>,
    progress: Option<Progress>,
    team_members: Option<Vec<UserId>>,
    template: Option<Option<ProjectTemplate>>,
}

impl ProjectPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: ProjectName) -> Self {
        self.name = Some(name);
        self
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyDescription`] for a blank value.
    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self, ProjectDomainError> {
        self.description = Some(validate_description(description.into())?);
        Ok(self)
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the progress percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Replaces the team.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NoTeamMembers`] for an empty team.
    pub fn with_team_members(
        mut self,
        team_members: impl IntoIterator<Item = UserId>,
    ) -> Result<Self, ProjectDomainError> {
        self.team_members = Some(validate_team(team_members)?);
        Ok(self)
    }

    /// Replaces or clears the creation template.
    #[must_use]
    pub const fn with_template(mut self, template: Option<ProjectTemplate>) -> Self {
        self.template = Some(template);
        self
    }

    /// Returns the replacement name, if any.
    #[must_use]
    pub const fn name(&self) -> Option<&ProjectName> {
        self.name.as_ref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<ProjectStatus> {
        self.status
    }

    /// Returns the replacement progress, if any.
    #[must_use]
    pub const fn progress(&self) -> Option<Progress> {
        self.progress
    }

    /// Returns the replacement team, if any.
    #[must_use]
    pub fn team_members(&self) -> Option<&[UserId]> {
        self.team_members.as_deref()
    }

    /// Returns the template change, if any.
    #[must_use]
    pub const fn template(&self) -> Option<Option<ProjectTemplate>> {
        self.template
    }
}

fn validate_description(description: String) -> Result<String, ProjectDomainError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ProjectDomainError::EmptyDescription);
    }
    Ok(trimmed.to_owned())
}

fn validate_team(
    team_members: impl IntoIterator<Item = UserId>,
) -> Result<Vec<UserId>, ProjectDomainError> {
    let mut members: Vec<UserId> = Vec::new();
    for member in team_members {
        if !members.contains(&member) {
            members.push(member);
        }
    }
    if members.is_empty() {
        return Err(ProjectDomainError::NoTeamMembers);
    }
    Ok(members)
}
