//! `PostgreSQL` integration tests for task persistence.

use chrono::NaiveDate;
use rstest::rstest;
use taskboard::project::{
    adapters::postgres::PostgresProjectRepository, domain::ProjectId, ports::ProjectRepository,
};
use taskboard::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{Assignee, NewTask, Position, TaskId, TaskPatch, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use taskboard::user::domain::UserId;

use super::helpers::{BoxError, TestDatabase, test_database};

fn new_task(title: &str, status: TaskStatus, position: i64) -> Result<NewTask, BoxError> {
    Ok(NewTask::new(
        ProjectId::new(1),
        TaskTitle::new(title)?,
        status,
        Position::new(position)?,
    ))
}

fn seeded_database() -> Result<Option<TestDatabase>, BoxError> {
    let Some(database) = test_database()? else {
        return Ok(None);
    };
    database.seed_projects(&["Website Relaunch", "Warehouse Migration"])?;
    Ok(Some(database))
}

fn repository(database: &TestDatabase) -> PostgresTaskRepository {
    PostgresTaskRepository::new(database.pool())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_identity_and_round_trips_fields() -> Result<(), BoxError> {
    let Some(database) = seeded_database()? else {
        return Ok(());
    };
    let tasks = repository(&database);
    let assignee = Assignee::new(UserId::new(7), "Ana Silva")?.with_avatar("AS");
    let due = NaiveDate::from_ymd_opt(2026, 11, 2).ok_or("invalid date")?;

    let created = tasks
        .create(
            &new_task("Audit pages", TaskStatus::Todo, 1)?
                .with_description("Every page")
                .with_assignee(Some(assignee.clone()))
                .with_due_date(Some(due)),
        )
        .await?;
    let found = tasks.find_by_id(created.id()).await?;

    assert_eq!(found.as_ref(), Some(&created));
    assert_eq!(created.assignee(), Some(&assignee));
    assert_eq!(created.due_date(), Some(due));
    assert_eq!(created.description(), "Every page");
    assert_eq!(created.created_at(), created.updated_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_merges_and_returns_confirmed_state() -> Result<(), BoxError> {
    let Some(database) = seeded_database()? else {
        return Ok(());
    };
    let tasks = repository(&database);
    let created = tasks.create(&new_task("Draft nav", TaskStatus::Todo, 2)?).await?;

    let patch = TaskPatch::new()
        .with_status(TaskStatus::Done)
        .with_position(Position::new(1)?);
    let updated = tasks.update(created.id(), &patch).await?;

    assert_eq!(updated.status(), TaskStatus::Done);
    assert_eq!(updated.position().value(), 1);
    assert_eq!(updated.title(), created.title());
    assert!(updated.updated_at() >= created.updated_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_the_assignee_removes_display_fields() -> Result<(), BoxError> {
    let Some(database) = seeded_database()? else {
        return Ok(());
    };
    let tasks = repository(&database);
    let assignee = Assignee::new(UserId::new(3), "Chen Wei")?;
    let created = tasks
        .create(&new_task("Templates", TaskStatus::InProgress, 1)?.with_assignee(Some(assignee)))
        .await?;

    let updated = tasks
        .update(created.id(), &TaskPatch::new().with_assignee(None))
        .await?;

    assert!(updated.assignee().is_none());
    assert!(tasks.list_by_assignee(UserId::new(3)).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_task_is_not_found() -> Result<(), BoxError> {
    let Some(database) = seeded_database()? else {
        return Ok(());
    };
    let tasks = repository(&database);

    let result = tasks
        .update(TaskId::new(404), &TaskPatch::new().with_status(TaskStatus::Done))
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(404)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_whether_a_row_was_removed() -> Result<(), BoxError> {
    let Some(database) = seeded_database()? else {
        return Ok(());
    };
    let tasks = repository(&database);
    let created = tasks.create(&new_task("Short lived", TaskStatus::Todo, 1)?).await?;

    assert!(tasks.delete(created.id()).await?);
    assert!(!tasks.delete(created.id()).await?);
    assert!(tasks.find_by_id(created.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_filter_by_project_and_assignee() -> Result<(), BoxError> {
    let Some(database) = seeded_database()? else {
        return Ok(());
    };
    let tasks = repository(&database);
    let ben = Assignee::new(UserId::new(2), "Ben Okafor")?;
    let first = tasks
        .create(&new_task("One", TaskStatus::Todo, 1)?.with_assignee(Some(ben.clone())))
        .await?;
    let other_project = NewTask::new(
        ProjectId::new(2),
        TaskTitle::new("Elsewhere")?,
        TaskStatus::Done,
        Position::FIRST,
    )
    .with_assignee(Some(ben));
    let second = tasks.create(&other_project).await?;
    tasks.create(&new_task("Unassigned", TaskStatus::Todo, 2)?).await?;

    let in_project = tasks.list_by_project(ProjectId::new(1)).await?;
    let for_ben = tasks.list_by_assignee(UserId::new(2)).await?;

    assert_eq!(in_project.len(), 2);
    let ben_ids: Vec<TaskId> = for_ben.iter().map(|task| task.id()).collect();
    assert_eq!(ben_ids, [first.id(), second.id()]);
    assert_eq!(tasks.list_all().await?.len(), 3);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn titles_longer_than_a_varchar_limit_are_stored() -> Result<(), BoxError> {
    let Some(database) = seeded_database()? else {
        return Ok(());
    };
    let tasks = repository(&database);
    let long_title = TaskTitle::bounded("r".repeat(300), 500)?;

    let created = tasks
        .create(&NewTask::new(
            ProjectId::new(1),
            long_title.clone(),
            TaskStatus::Todo,
            Position::FIRST,
        ))
        .await?;

    assert_eq!(created.title(), &long_title);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_must_belong_to_a_stored_project() -> Result<(), BoxError> {
    let Some(database) = seeded_database()? else {
        return Ok(());
    };
    let tasks = repository(&database);

    let result = tasks
        .create(&NewTask::new(
            ProjectId::new(99),
            TaskTitle::new("Orphan")?,
            TaskStatus::Todo,
            Position::FIRST,
        ))
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::Persistence(_))));
    assert!(tasks.list_all().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_removes_its_tasks() -> Result<(), BoxError> {
    let Some(database) = seeded_database()? else {
        return Ok(());
    };
    let tasks = repository(&database);
    let projects = PostgresProjectRepository::new(database.pool());
    tasks.create(&new_task("Goes away", TaskStatus::Todo, 1)?).await?;

    assert!(projects.delete(ProjectId::new(1)).await?);
    assert!(tasks.list_by_project(ProjectId::new(1)).await?.is_empty());
    Ok(())
}
