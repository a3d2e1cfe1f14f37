//! Loads a fixture into the in-memory store and logs one project's board.
//!
//! Usage:
//!
//! ```text
//! board_demo <fixture-path> <project-id>
//! ```
//!
//! The fixture is the JSON document read by
//! [`taskboard::fixtures::BoardFixture`]. Output goes through `tracing`;
//! set `RUST_LOG` to change the level.

use std::env;
use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::fixtures::{BoardFixture, FixtureError};
use taskboard::project::domain::ProjectId;
use taskboard::task::adapters::logging::TracingNotifier;
use taskboard::task::services::{BoardError, TaskBoard};
use taskboard::telemetry::{self, TelemetryError};
use thiserror::Error;
use tokio::runtime::Builder;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum DemoError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
}

fn main() -> Result<(), BoxError> {
    run(env::args()).map_err(Into::into)
}

fn run(args: impl Iterator<Item = String>) -> Result<(), DemoError> {
    let (fixture_path, project_id) = parse_args(args)?;
    telemetry::init_tracing(telemetry::DEFAULT_DIRECTIVE)?;
    let fixture = BoardFixture::from_path(&fixture_path)?;
    let repository = Arc::new(fixture.task_repository(Arc::new(DefaultClock)));
    let board = TaskBoard::new(repository, Arc::new(TracingNotifier));

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(DemoError::RuntimeInit)?;
    runtime.block_on(board.load_tasks(project_id))?;

    for column in board.columns() {
        tracing::info!(column = column.title(), tasks = column.len(), "column");
        for task in column.tasks() {
            tracing::info!(
                task_id = %task.id(),
                position = %task.position(),
                title = task.title().as_str(),
                assignee = task.assignee().map(|assignee| assignee.name()),
                "task"
            );
        }
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(String, ProjectId), DemoError> {
    let _program = args.next();
    let fixture_path = args
        .next()
        .ok_or_else(|| DemoError::InvalidArgs("missing fixture path argument".into()))?;
    let raw_project = args
        .next()
        .ok_or_else(|| DemoError::InvalidArgs("missing project id argument".into()))?;
    let project_id = raw_project
        .trim()
        .parse::<i64>()
        .map(ProjectId::new)
        .map_err(|err| DemoError::InvalidArgs(format!("invalid project id '{raw_project}': {err}")))?;
    if let Some(extra) = args.next() {
        return Err(DemoError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok((fixture_path, project_id))
}
