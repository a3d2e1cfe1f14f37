//! Board engine flows against the fixture-seeded in-memory store.

use rstest::rstest;
use taskboard::project::domain::ProjectId;
use taskboard::task::{
    domain::{TaskId, TaskStatus},
    ports::{NoticeKind, TaskRepository},
    services::{BoardOutcome, Confirmation, LoadState, SkipReason, TaskFields},
};

use super::helpers::{SeededBoard, seeded_board};

const WEBSITE: ProjectId = ProjectId::new(1);
const WAREHOUSE: ProjectId = ProjectId::new(2);

fn column_ids(fixture: &SeededBoard, status: TaskStatus) -> Vec<i64> {
    fixture
        .board
        .snapshot()
        .column(status)
        .map(|column| column.task_ids().into_iter().map(TaskId::value).collect())
        .unwrap_or_default()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn loading_a_project_partitions_its_tasks(seeded_board: SeededBoard) -> eyre::Result<()> {
    seeded_board.board.load_tasks(WEBSITE).await?;

    let snapshot = seeded_board.board.snapshot();
    eyre::ensure!(snapshot.load_state() == &LoadState::Ready, "board should be ready");
    let titles: Vec<&str> = snapshot.columns().iter().map(|column| column.title()).collect();
    eyre::ensure!(titles == ["To Do", "In Progress", "Done"], "unexpected columns {titles:?}");
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::Todo) == [1, 2], "todo order");
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::InProgress) == [4], "in progress");
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::Done) == [3], "done");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drop_on_task_is_persisted_to_the_store(seeded_board: SeededBoard) -> eyre::Result<()> {
    seeded_board.board.load_tasks(WEBSITE).await?;

    let outcome = seeded_board
        .board
        .drop_on_task(TaskId::new(2), TaskId::new(3))
        .await?;

    eyre::ensure!(matches!(outcome, BoardOutcome::Applied(_)), "move should apply");
    let stored = seeded_board
        .tasks
        .find_by_id(TaskId::new(2))
        .await?
        .ok_or_else(|| eyre::eyre!("task 2 should still exist"))?;
    eyre::ensure!(stored.status() == TaskStatus::Done, "stored status");
    eyre::ensure!(stored.position().value() == 1, "stored position");
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::Done) == [2, 3], "ties keep board order");
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::Todo) == [1], "todo after move");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_land_at_the_end_of_their_column(
    seeded_board: SeededBoard,
) -> eyre::Result<()> {
    seeded_board.board.load_tasks(WEBSITE).await?;

    let outcome = seeded_board
        .board
        .create_task(TaskStatus::Todo, TaskFields::new("Write launch post"))
        .await?;

    let BoardOutcome::Applied(created) = outcome else {
        eyre::bail!("create should apply, got {outcome:?}");
    };
    eyre::ensure!(created.id().value() == 7, "ids continue after the seed data");
    eyre::ensure!(created.position().value() == 3, "position after the last todo");
    eyre::ensure!(created.project_id() == WEBSITE, "task belongs to the loaded project");
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::Todo) == [1, 2, 7], "todo order");
    let stored = seeded_board.tasks.list_by_project(WEBSITE).await?;
    eyre::ensure!(stored.len() == 5, "store should hold the new task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_removed_elsewhere_is_reconciled_on_delete(
    seeded_board: SeededBoard,
) -> eyre::Result<()> {
    seeded_board.board.load_tasks(WEBSITE).await?;
    seeded_board.tasks.delete(TaskId::new(1)).await?;

    let outcome = seeded_board
        .board
        .delete_task(TaskId::new(1), Confirmation::Confirmed)
        .await?;

    eyre::ensure!(
        outcome
            == BoardOutcome::Removed {
                id: TaskId::new(1),
                was_present: true,
            },
        "board copy should be dropped, got {outcome:?}"
    );
    let again = seeded_board
        .board
        .delete_task(TaskId::new(1), Confirmation::Confirmed)
        .await?;
    eyre::ensure!(
        again
            == BoardOutcome::Removed {
                id: TaskId::new(1),
                was_present: false,
            },
        "second delete removes nothing, got {again:?}"
    );
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::Todo) == [2], "todo after delete");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_a_task_removed_elsewhere_is_skipped(
    seeded_board: SeededBoard,
) -> eyre::Result<()> {
    seeded_board.board.load_tasks(WEBSITE).await?;
    seeded_board.tasks.delete(TaskId::new(4)).await?;
    let before = seeded_board.board.tasks();

    let outcome = seeded_board
        .board
        .drop_on_column(TaskId::new(4), TaskStatus::Done)
        .await?;

    eyre::ensure!(
        outcome == BoardOutcome::Skipped(SkipReason::NotFound),
        "expected a benign skip, got {outcome:?}"
    );
    eyre::ensure!(seeded_board.board.tasks() == before, "board unchanged");
    eyre::ensure!(seeded_board.notifier.drain().is_empty(), "no notice for not found");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn switching_projects_replaces_the_board(seeded_board: SeededBoard) -> eyre::Result<()> {
    seeded_board.board.load_tasks(WEBSITE).await?;
    seeded_board.board.begin_drag(TaskId::new(1));

    seeded_board.board.load_tasks(WAREHOUSE).await?;

    eyre::ensure!(seeded_board.board.project_id() == Some(WAREHOUSE), "active project");
    eyre::ensure!(seeded_board.board.dragged().is_none(), "selectors cleared");
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::Todo).is_empty(), "no todo");
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::InProgress) == [5], "in progress");
    eyre::ensure!(column_ids(&seeded_board, TaskStatus::Done) == [6], "done");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successful_gestures_raise_success_notices(seeded_board: SeededBoard) -> eyre::Result<()> {
    seeded_board.board.load_tasks(WEBSITE).await?;

    seeded_board
        .board
        .drop_on_column(TaskId::new(1), TaskStatus::InProgress)
        .await?;
    seeded_board
        .board
        .delete_task(TaskId::new(3), Confirmation::Confirmed)
        .await?;

    let notices = seeded_board.notifier.drain();
    let messages: Vec<&str> = notices.iter().map(|notice| notice.message()).collect();
    eyre::ensure!(
        messages == ["Task moved to In Progress!", "Task deleted successfully!"],
        "unexpected notices {messages:?}"
    );
    eyre::ensure!(
        notices.iter().all(|notice| notice.kind() == NoticeKind::Success),
        "all notices should be successes"
    );
    Ok(())
}
