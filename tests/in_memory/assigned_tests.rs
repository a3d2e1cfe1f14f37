//! "My tasks" listings over the fixture data.

use std::sync::Arc;

use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DueBadge, TaskStatus},
    services::{AssignedTasks, StatusCounts, StatusFilter},
};
use taskboard::user::domain::UserId;

use super::helpers::{SeededStore, clock, date, store};

const ANA: UserId = UserId::new(1);
const BEN: UserId = UserId::new(2);

fn service(store: &SeededStore) -> AssignedTasks<InMemoryTaskRepository> {
    AssignedTasks::new(Arc::clone(&store.tasks), clock())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigned_tasks_span_projects_with_due_badges(store: SeededStore) -> eyre::Result<()> {
    let listing = service(&store).list(BEN, StatusFilter::All).await?;

    let summary: Vec<(i64, Option<DueBadge>)> = listing
        .iter()
        .map(|assigned| (assigned.task().id().value(), assigned.due_badge()))
        .collect();
    eyre::ensure!(
        summary
            == [
                (2, Some(DueBadge::Tomorrow)),
                (5, Some(DueBadge::Scheduled(date(2026, 11, 2)))),
                (6, None),
            ],
        "unexpected listing {summary:?}"
    );
    Ok(())
}

#[rstest]
#[case(StatusFilter::All, 2)]
#[case(StatusFilter::Only(TaskStatus::Todo), 1)]
#[case(StatusFilter::Only(TaskStatus::InProgress), 0)]
#[case(StatusFilter::Only(TaskStatus::Done), 1)]
#[tokio::test(flavor = "multi_thread")]
async fn filters_narrow_the_listing(
    store: SeededStore,
    #[case] filter: StatusFilter,
    #[case] expected: usize,
) -> eyre::Result<()> {
    let listing = service(&store).list(ANA, filter).await?;

    eyre::ensure!(listing.len() == expected, "expected {expected}, got {}", listing.len());
    eyre::ensure!(
        listing.iter().all(|assigned| filter.accepts(assigned.task().status())),
        "filter leaked a task"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overdue_task_is_flagged(store: SeededStore) -> eyre::Result<()> {
    let listing = service(&store)
        .list(ANA, StatusFilter::Only(TaskStatus::Todo))
        .await?;

    let badges: Vec<Option<DueBadge>> = listing
        .iter()
        .map(|assigned| assigned.due_badge())
        .collect();
    eyre::ensure!(badges == [Some(DueBadge::Overdue)], "unexpected badges {badges:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn counts_cover_every_status(store: SeededStore) -> eyre::Result<()> {
    let counts = service(&store).counts(BEN).await?;

    eyre::ensure!(
        counts
            == StatusCounts {
                todo: 1,
                in_progress: 1,
                done: 1,
            },
        "unexpected counts {counts:?}"
    );
    eyre::ensure!(counts.for_filter(StatusFilter::All) == 3, "total");
    Ok(())
}
