//! Diesel row models for user persistence.

use super::schema::users;
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Optional avatar reference.
    pub avatar: Option<String>,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Optional avatar reference.
    pub avatar: Option<String>,
}

/// Partial update model; `None` fields are skipped.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
    /// Avatar change; `Some(None)` clears the column.
    pub avatar: Option<Option<String>>,
}
