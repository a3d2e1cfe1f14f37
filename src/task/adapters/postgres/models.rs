//! Diesel row models for board task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Board column.
    pub status: String,
    /// Rank within the partition.
    pub position: i64,
    /// Assigned user identifier.
    pub assignee_id: Option<i64>,
    /// Assigned user display name.
    pub assignee_name: Option<String>,
    /// Assigned user avatar reference.
    pub assignee_avatar: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records; timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Board column.
    pub status: String,
    /// Rank within the partition.
    pub position: i64,
    /// Assigned user identifier.
    pub assignee_id: Option<i64>,
    /// Assigned user display name.
    pub assignee_name: Option<String>,
    /// Assigned user avatar reference.
    pub assignee_avatar: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

/// Partial update model; `None` fields are skipped and `Some(None)` clears a
/// nullable column.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement column.
    pub status: Option<String>,
    /// Replacement rank.
    pub position: Option<i64>,
    /// Assignee identifier change.
    pub assignee_id: Option<Option<i64>>,
    /// Assignee display name change.
    pub assignee_name: Option<Option<String>>,
    /// Assignee avatar change.
    pub assignee_avatar: Option<Option<String>>,
    /// Due date change.
    pub due_date: Option<Option<NaiveDate>>,
}
