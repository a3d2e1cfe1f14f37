//! `PostgreSQL` integration tests for project and user persistence.

use std::sync::Arc;

use rstest::rstest;
use taskboard::project::{
    adapters::postgres::PostgresProjectRepository,
    domain::{ProjectId, ProjectName, ProjectStatus, ProjectTemplate},
    ports::{ProjectRepository, ProjectRepositoryError},
    services::{
        CreateProjectRequest, ProjectDirectory, ProjectDirectoryError, UpdateProjectRequest,
    },
};
use taskboard::user::{
    adapters::postgres::PostgresUserRepository,
    domain::{EmailAddress, NewUser, UserName, UserPatch},
    ports::UserRepository,
};

use super::helpers::{BoxError, test_database};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_round_trip_and_update() -> Result<(), BoxError> {
    let Some(database) = test_database()? else {
        return Ok(());
    };
    let users = PostgresUserRepository::new(database.pool());

    let created = users
        .create(
            &NewUser::new(UserName::new("Ana Silva")?, EmailAddress::new("Ana@Example.com")?)
                .with_avatar("AS"),
        )
        .await?;
    let renamed = users
        .update(
            created.id(),
            &UserPatch::new().with_name(UserName::new("Ana Souza")?),
        )
        .await?;

    assert_eq!(users.find_by_id(created.id()).await?, Some(renamed.clone()));
    assert_eq!(renamed.name().as_str(), "Ana Souza");
    assert_eq!(renamed.email(), created.email());
    assert_eq!(renamed.avatar(), Some("AS"));
    assert!(users.delete(created.id()).await?);
    assert!(users.list_all().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn projects_keep_team_and_template_through_updates() -> Result<(), BoxError> {
    let Some(database) = test_database()? else {
        return Ok(());
    };
    let users = Arc::new(PostgresUserRepository::new(database.pool()));
    let projects = Arc::new(PostgresProjectRepository::new(database.pool()));
    let ana = users
        .create(&NewUser::new(UserName::new("Ana Silva")?, EmailAddress::new("ana@example.com")?))
        .await?;
    let ben = users
        .create(&NewUser::new(UserName::new("Ben Okafor")?, EmailAddress::new("ben@example.com")?))
        .await?;
    let directory = ProjectDirectory::new(Arc::clone(&projects), Arc::clone(&users));

    let created = directory
        .create(
            CreateProjectRequest::new("Website", "Relaunch the site", [ben.id(), ana.id()])
                .with_template("web"),
        )
        .await?;
    let updated = directory
        .update(
            created.id(),
            UpdateProjectRequest::new()
                .with_status(ProjectStatus::OnHold)
                .with_progress(45),
        )
        .await?;
    let team = directory.team_members(created.id()).await?;

    assert_eq!(created.status(), ProjectStatus::Active);
    assert_eq!(updated.status(), ProjectStatus::OnHold);
    assert_eq!(updated.progress().value(), 45);
    assert_eq!(updated.template(), Some(ProjectTemplate::Web));
    assert_eq!(updated.name(), &ProjectName::new("Website")?);
    let team_ids: Vec<_> = team.iter().map(|user| user.id()).collect();
    assert_eq!(team_ids, [ben.id(), ana.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_project_is_not_found() -> Result<(), BoxError> {
    let Some(database) = test_database()? else {
        return Ok(());
    };
    let projects = Arc::new(PostgresProjectRepository::new(database.pool()));
    let users = Arc::new(PostgresUserRepository::new(database.pool()));
    let directory = ProjectDirectory::new(Arc::clone(&projects), users);

    let team = directory.team_members(ProjectId::new(99)).await;

    assert!(matches!(
        team,
        Err(ProjectDirectoryError::Repository(ProjectRepositoryError::NotFound(_)))
    ));
    assert!(!projects.delete(ProjectId::new(99)).await?);
    Ok(())
}
