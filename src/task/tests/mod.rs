//! Unit tests for the task board.


use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use crate::project::domain::ProjectId;
use crate::task::domain::{Assignee, PersistedTaskData, Position, Task, TaskId, TaskStatus, TaskTitle};
use crate::user::domain::UserId;

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub(super) fn at_noon(date: NaiveDate) -> Self {
        let instant = date
            .and_hms_opt(12, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .expect("valid noon");
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn persisted(id: i64, project: i64, status: TaskStatus, position: i64) -> PersistedTaskData {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    PersistedTaskData {
        id: TaskId::new(id),
        project_id: ProjectId::new(project),
        title: TaskTitle::new(format!("Task {id}")).expect("valid title"),
        description: String::new(),
        status,
        position: Position::new(position).expect("valid position"),
        assignee: None,
        due_date: None,
        created_at,
        updated_at: created_at,
    }
}

pub(super) fn task(id: i64, project: i64, status: TaskStatus, position: i64) -> Task {
    Task::from_persisted(persisted(id, project, status, position))
}

pub(super) fn assignee(id: i64, name: &str) -> Assignee {
    Assignee::new(UserId::new(id), name).expect("valid assignee")
}
