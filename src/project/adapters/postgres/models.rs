//! Diesel row models for project persistence.

use super::schema::projects;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Progress percentage.
    pub progress: i16,
    /// Team member user identifiers.
    pub team_members: Vec<i64>,
    /// Optional creation template.
    pub template: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for project records; timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Progress percentage.
    pub progress: i16,
    /// Team member user identifiers.
    pub team_members: Vec<i64>,
    /// Optional creation template.
    pub template: Option<String>,
}

/// Partial update model; `None` fields are skipped.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = projects)]
pub struct ProjectChangeset {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<String>,
    /// Replacement progress.
    pub progress: Option<i16>,
    /// Replacement team.
    pub team_members: Option<Vec<i64>>,
    /// Template change; `Some(None)` clears the column.
    pub template: Option<Option<String>>,
}
