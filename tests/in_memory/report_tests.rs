//! Completion statistics and team workload over the fixture data.

use std::sync::Arc;

use rstest::rstest;
use taskboard::project::adapters::memory::InMemoryProjectRepository;
use taskboard::report::ReportService;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskId, ports::TaskRepository,
};
use taskboard::user::{adapters::memory::InMemoryUserRepository, domain::UserId};

use super::helpers::{SeededStore, clock, store};

type Reports =
    ReportService<InMemoryTaskRepository, InMemoryProjectRepository, InMemoryUserRepository>;

fn reports(store: &SeededStore) -> Reports {
    ReportService::new(
        Arc::clone(&store.tasks),
        Arc::clone(&store.projects),
        Arc::clone(&store.users),
        clock(),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_stats_summarise_every_project(store: SeededStore) -> eyre::Result<()> {
    let stats = reports(&store).board_stats().await?;

    eyre::ensure!(stats.total_tasks() == 6, "total {}", stats.total_tasks());
    eyre::ensure!(stats.completion_rate == 33, "rate {}", stats.completion_rate);
    eyre::ensure!(stats.overdue == 2, "overdue {}", stats.overdue);
    eyre::ensure!(stats.total_projects == 2, "projects {}", stats.total_projects);
    eyre::ensure!(
        stats.completed_per_project == 1 && stats.tasks_per_member == 2,
        "insights {} {}",
        stats.completed_per_project,
        stats.tasks_per_member
    );
    let ranking: Vec<(&str, u8)> = stats
        .user_productivity
        .iter()
        .map(|entry| (entry.name.as_str(), entry.rate))
        .collect();
    eyre::ensure!(
        ranking == [("Ana Silva", 50), ("Ben Okafor", 33), ("Chen Wei", 0)],
        "unexpected ranking {ranking:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn team_workload_averages_member_rates(store: SeededStore) -> eyre::Result<()> {
    let workload = reports(&store).team_workload().await?;

    eyre::ensure!(workload.members.len() == 3, "members {}", workload.members.len());
    eyre::ensure!(
        workload.average_completion_rate == 28,
        "average {}",
        workload.average_completion_rate
    );
    eyre::ensure!(workload.active_tasks == 2, "active {}", workload.active_tasks);
    let ben = workload
        .member(UserId::new(2))
        .ok_or_else(|| eyre::eyre!("Ben should be on the team"))?;
    eyre::ensure!(ben.counts.total() == 3, "Ben's total {}", ben.counts.total());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_board_reports_zero_rate(store: SeededStore) -> eyre::Result<()> {
    for id in 1..=6 {
        store.tasks.delete(TaskId::new(id)).await?;
    }

    let stats = reports(&store).board_stats().await?;

    eyre::ensure!(stats.total_tasks() == 0, "no tasks left");
    eyre::ensure!(stats.completion_rate == 0, "rate {}", stats.completion_rate);
    eyre::ensure!(stats.overdue == 0, "overdue {}", stats.overdue);
    Ok(())
}
