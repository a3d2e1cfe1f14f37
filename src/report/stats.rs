//! Pure report calculations.

use chrono::NaiveDate;

use crate::task::domain::Task;
use crate::task::services::StatusCounts;
use crate::user::domain::{User, UserId};

/// Share of `done` in `total` as a whole percentage, rounding halves up.
///
/// Returns 0 when `total` is 0.
#[must_use]
pub fn completion_rate(done: usize, total: usize) -> u8 {
    let rate = done
        .saturating_mul(200)
        .saturating_add(total)
        .checked_div(total.saturating_mul(2))
        .unwrap_or(0);
    u8::try_from(rate.min(100)).unwrap_or(100)
}

/// Completion figures for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProductivity {
    /// User the figures belong to.
    pub user_id: UserId,
    /// User display name.
    pub name: String,
    /// Tasks assigned to the user.
    pub total: usize,
    /// Assigned tasks that are done.
    pub completed: usize,
    /// Completion percentage.
    pub rate: u8,
}

/// Whole-board statistics across every project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStats {
    /// Tasks per status.
    pub counts: StatusCounts,
    /// Percentage of tasks that are done.
    pub completion_rate: u8,
    /// Open tasks whose due date has passed.
    pub overdue: usize,
    /// Number of projects.
    pub total_projects: usize,
    /// Done tasks per project, rounded; 0 without projects.
    pub completed_per_project: usize,
    /// Tasks per team member, rounded; 0 without users.
    pub tasks_per_member: usize,
    /// Per-user figures, highest completion rate first.
    pub user_productivity: Vec<UserProductivity>,
}

impl BoardStats {
    /// Computes statistics as of `today`.
    #[must_use]
    pub fn compute(tasks: &[Task], total_projects: usize, users: &[User], today: NaiveDate) -> Self {
        let counts = StatusCounts::from_tasks(tasks);
        let mut user_productivity: Vec<UserProductivity> = users
            .iter()
            .map(|user| {
                let assigned = StatusCounts::from_tasks(
                    tasks.iter().filter(|task| task.is_assigned_to(user.id())),
                );
                UserProductivity {
                    user_id: user.id(),
                    name: user.name().as_str().to_owned(),
                    total: assigned.total(),
                    completed: assigned.done,
                    rate: completion_rate(assigned.done, assigned.total()),
                }
            })
            .collect();
        user_productivity.sort_by(|left, right| right.rate.cmp(&left.rate));

        Self {
            counts,
            completion_rate: completion_rate(counts.done, counts.total()),
            overdue: tasks.iter().filter(|task| task.is_overdue(today)).count(),
            total_projects,
            completed_per_project: rounded_ratio(counts.done, total_projects),
            tasks_per_member: rounded_ratio(counts.total(), users.len()),
            user_productivity,
        }
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub const fn total_tasks(&self) -> usize {
        self.counts.total()
    }
}

/// Task load of one team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberWorkload {
    /// Team member.
    pub user_id: UserId,
    /// Member display name.
    pub name: String,
    /// Assigned tasks per status.
    pub counts: StatusCounts,
    /// Completion percentage of the assigned tasks.
    pub completion_rate: u8,
}

/// Workload of every team member in directory order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamWorkload {
    /// Per-member figures.
    pub members: Vec<MemberWorkload>,
    /// Mean of the member completion rates, rounded; 0 for an empty team.
    pub average_completion_rate: u8,
    /// Tasks marked in progress across the team.
    pub active_tasks: usize,
}

impl TeamWorkload {
    /// Computes the workload of `users` from `tasks`.
    #[must_use]
    pub fn compute(tasks: &[Task], users: &[User]) -> Self {
        let members: Vec<MemberWorkload> = users
            .iter()
            .map(|user| {
                let counts = StatusCounts::from_tasks(
                    tasks.iter().filter(|task| task.is_assigned_to(user.id())),
                );
                MemberWorkload {
                    user_id: user.id(),
                    name: user.name().as_str().to_owned(),
                    counts,
                    completion_rate: completion_rate(counts.done, counts.total()),
                }
            })
            .collect();
        let rate_sum = members
            .iter()
            .map(|member| usize::from(member.completion_rate))
            .sum::<usize>();
        let average_completion_rate = rounded_mean(rate_sum, members.len());
        let active_tasks = members.iter().map(|member| member.counts.in_progress).sum();
        Self {
            members,
            average_completion_rate,
            active_tasks,
        }
    }

    /// Returns the figures for `user_id`, if the user is on the team.
    #[must_use]
    pub fn member(&self, user_id: UserId) -> Option<&MemberWorkload> {
        self.members.iter().find(|member| member.user_id == user_id)
    }
}

/// `numerator / denominator` rounded half up; 0 when `denominator` is 0.
fn rounded_ratio(numerator: usize, denominator: usize) -> usize {
    numerator
        .saturating_mul(2)
        .saturating_add(denominator)
        .checked_div(denominator.saturating_mul(2))
        .unwrap_or(0)
}

fn rounded_mean(sum: usize, count: usize) -> u8 {
    u8::try_from(rounded_ratio(sum, count).min(100)).unwrap_or(100)
}

