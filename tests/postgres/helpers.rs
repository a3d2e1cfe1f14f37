//! Shared test helpers for `PostgreSQL` integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use taskboard::store::{BoardPgPool, StoreConfig};

/// Boxed error type used by the helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// SQL creating the board tables.
pub const CREATE_BOARD_TABLES_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_board_tables/up.sql");

static SCHEMA_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SearchPath {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("SET search_path TO {}", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Migrated schema that is dropped when the value goes out of scope.
pub struct TestDatabase {
    url: String,
    schema: String,
    pool: BoardPgPool,
}

impl TestDatabase {
    /// Returns a pool whose connections resolve tables in this schema.
    #[must_use]
    pub fn pool(&self) -> BoardPgPool {
        self.pool.clone()
    }

    /// Inserts one project per name; identifiers start at 1.
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be checked out or an insert
    /// fails.
    pub fn seed_projects(&self, names: &[&str]) -> Result<(), BoxError> {
        let mut connection = self.pool.get()?;
        for name in names {
            diesel::sql_query("INSERT INTO projects (name, description) VALUES ($1, 'Seeded')")
                .bind::<diesel::sql_types::Text, _>(*name)
                .execute(&mut *connection)?;
        }
        Ok(())
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        if let Ok(mut connection) = PgConnection::establish(&self.url) {
            if let Err(err) =
                connection.batch_execute(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            {
                tracing::warn!(error = %err, schema = %self.schema, "schema cleanup failed");
            }
        }
    }
}

/// Provisions a fresh migrated schema, or `None` when no database is
/// configured.
///
/// # Errors
///
/// Returns an error if the schema cannot be created or migrated.
pub fn test_database() -> Result<Option<TestDatabase>, BoxError> {
    let Ok(config) = StoreConfig::from_env() else {
        return Ok(None);
    };
    let url = config.database_url().to_owned();
    let schema = format!(
        "taskboard_test_{}_{}",
        std::process::id(),
        SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst)
    );

    let mut connection = PgConnection::establish(&url)?;
    connection.batch_execute(&format!(
        "CREATE SCHEMA {schema}; SET search_path TO {schema};"
    ))?;
    connection.batch_execute(CREATE_BOARD_TABLES_SQL)?;

    let pool = Pool::builder()
        .max_size(2)
        .connection_customizer(Box::new(SearchPath(schema.clone())))
        .build(ConnectionManager::<PgConnection>::new(url.as_str()))?;
    Ok(Some(TestDatabase { url, schema, pool }))
}
