//! `PostgreSQL` repository implementation for the project catalogue.

use super::{
    models::{NewProjectRow, ProjectChangeset, ProjectRow},
    schema::projects,
};
use crate::project::{
    domain::{
        NewProject, PersistedProjectData, Progress, Project, ProjectId, ProjectName, ProjectPatch,
        ProjectStatus, ProjectTemplate,
    },
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::store::{BoardPgPool, run_blocking};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: BoardPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_blocking(&self.pool, f).await
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(|connection| {
            projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?
                .into_iter()
                .map(row_to_project)
                .collect()
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.value())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn create(&self, project: &NewProject) -> ProjectRepositoryResult<Project> {
        let new_row = NewProjectRow {
            name: project.name().as_str().to_owned(),
            description: project.description().to_owned(),
            status: project.status().as_str().to_owned(),
            progress: i16::from(project.progress().value()),
            team_members: project.team_members().iter().map(|id| id.value()).collect(),
            template: project.template().map(|template| template.as_str().to_owned()),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(projects::table)
                .values(&new_row)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            row_to_project(row)
        })
        .await
    }

    async fn update(&self, id: ProjectId, patch: &ProjectPatch) -> ProjectRepositoryResult<Project> {
        let changeset = ProjectChangeset {
            name: patch.name().map(|name| name.as_str().to_owned()),
            description: patch.description().map(str::to_owned),
            status: patch.status().map(|status| status.as_str().to_owned()),
            progress: patch.progress().map(|progress| i16::from(progress.value())),
            team_members: patch
                .team_members()
                .map(|members| members.iter().map(|member| member.value()).collect()),
            template: patch
                .template()
                .map(|template| template.map(|value| value.as_str().to_owned())),
        };
        self.run_blocking(move |connection| {
            let row = diesel::update(projects::table.find(id.value()))
                .set((&changeset, projects::updated_at.eq(diesel::dsl::now)))
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?
                .ok_or(ProjectRepositoryError::NotFound(id))?;
            row_to_project(row)
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(projects::table.find(id.value()))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let ProjectRow {
        id,
        name,
        description,
        status: persisted_status,
        progress: persisted_progress,
        team_members,
        template: persisted_template,
        created_at,
        updated_at,
    } = row;

    let status = ProjectStatus::try_from(persisted_status.as_str())
        .map_err(ProjectRepositoryError::persistence)?;
    let progress =
        Progress::new(i64::from(persisted_progress)).map_err(ProjectRepositoryError::persistence)?;
    let template = persisted_template
        .as_deref()
        .map(ProjectTemplate::try_from)
        .transpose()
        .map_err(ProjectRepositoryError::persistence)?;

    let data = PersistedProjectData {
        id: ProjectId::new(id),
        name: ProjectName::new(name).map_err(ProjectRepositoryError::persistence)?,
        description,
        status,
        progress,
        team_members: team_members.into_iter().map(UserId::new).collect(),
        template,
        created_at,
        updated_at,
    };
    Ok(Project::from_persisted(data))
}
