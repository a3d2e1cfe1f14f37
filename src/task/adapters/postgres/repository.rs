//! `PostgreSQL` repository implementation for board tasks.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::project::domain::ProjectId;
use crate::store::{BoardPgPool, run_blocking};
use crate::task::{
    domain::{
        Assignee, NewTask, PersistedTaskData, Position, Task, TaskId, TaskPatch, TaskStatus,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_blocking(&self.pool, f).await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_assignee(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::assignee_id.eq(user_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let assignee = task.assignee();
        let new_row = NewTaskRow {
            project_id: task.project_id().value(),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            status: task.status().as_str().to_owned(),
            position: task.position().value(),
            assignee_id: assignee.map(|value| value.user_id().value()),
            assignee_name: assignee.map(|value| value.name().to_owned()),
            assignee_avatar: assignee.and_then(|value| value.avatar().map(str::to_owned)),
            due_date: task.due_date(),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task> {
        let changeset = to_changeset(patch);
        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.value()))
                .set((&changeset, tasks::updated_at.eq(diesel::dsl::now)))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn to_changeset(patch: &TaskPatch) -> TaskChangeset {
    let assignee = patch.assignee();
    TaskChangeset {
        title: patch.title().map(|title| title.as_str().to_owned()),
        description: patch.description().map(str::to_owned),
        status: patch.status().map(|status| status.as_str().to_owned()),
        position: patch.position().map(Position::value),
        assignee_id: assignee.map(|change| change.as_ref().map(|value| value.user_id().value())),
        assignee_name: assignee.map(|change| change.as_ref().map(|value| value.name().to_owned())),
        assignee_avatar: assignee.map(|change| {
            change
                .as_ref()
                .and_then(|value| value.avatar().map(str::to_owned))
        }),
        due_date: patch.due_date(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        project_id,
        title: persisted_title,
        description,
        status: persisted_status,
        position: persisted_position,
        assignee_id,
        assignee_name,
        assignee_avatar,
        due_date,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let position = Position::new(persisted_position).map_err(TaskRepositoryError::persistence)?;
    let assignee = match (assignee_id, assignee_name) {
        (Some(user_id), Some(name)) => {
            let reference =
                Assignee::new(UserId::new(user_id), name).map_err(TaskRepositoryError::persistence)?;
            Some(
                assignee_avatar
                    .into_iter()
                    .fold(reference, |assigned, avatar| assigned.with_avatar(avatar)),
            )
        }
        _ => None,
    };

    let data = PersistedTaskData {
        id: TaskId::new(id),
        project_id: ProjectId::new(project_id),
        title,
        description,
        status,
        position,
        assignee,
        due_date,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
