//! `PostgreSQL` connection settings shared by the Diesel repository adapters.
//!
//! [`StoreConfig`] resolves the database URL and pool limits from the
//! environment, and [`run_blocking`] offloads synchronous Diesel work onto
//! Tokio's blocking thread pool so the async executor is never stalled.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::time::Duration;
use thiserror::Error;

/// `PostgreSQL` connection pool type used by all board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// Primary environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "TASKBOARD_DATABASE_URL";

/// Fallback environment variable holding the database URL.
pub const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable overriding the maximum pool size.
pub const POOL_SIZE_VAR: &str = "TASKBOARD_DB_POOL_SIZE";

/// Errors raised while resolving store configuration or building the pool.
#[derive(Debug, Error)]
pub enum StoreConfigError {
    /// Neither database URL variable is set.
    #[error("database URL is not configured; set TASKBOARD_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,

    /// The pool size is not a positive integer.
    #[error("invalid pool size '{0}', expected a positive integer")]
    InvalidPoolSize(String),

    /// The connection pool could not be created.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Connection settings for the `PostgreSQL` record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    database_url: String,
    max_pool_size: u32,
    connection_timeout: Duration,
}

impl StoreConfig {
    /// Pool size used when no override is configured.
    pub const DEFAULT_POOL_SIZE: u32 = 8;

    /// Time to wait for a pooled connection before failing.
    pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a configuration for the given database URL with default limits.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_pool_size: Self::DEFAULT_POOL_SIZE,
            connection_timeout: Self::DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Sets the maximum number of pooled connections.
    #[must_use]
    pub const fn with_max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = size;
        self
    }

    /// Sets the pooled connection checkout timeout.
    #[must_use]
    pub const fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError::MissingDatabaseUrl`] when no URL variable
    /// is set, or [`StoreConfigError::InvalidPoolSize`] when the pool size
    /// override is malformed.
    pub fn from_env() -> Result<Self, StoreConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`StoreConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .or_else(|| lookup(FALLBACK_DATABASE_URL_VAR))
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(StoreConfigError::MissingDatabaseUrl)?;

        let max_pool_size = lookup(POOL_SIZE_VAR)
            .map_or(Ok(Self::DEFAULT_POOL_SIZE), |raw| parse_pool_size(&raw))?;

        Ok(Self::new(database_url).with_max_pool_size(max_pool_size))
    }

    /// Returns the database URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn max_pool_size(&self) -> u32 {
        self.max_pool_size
    }

    /// Returns the connection checkout timeout.
    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    /// Builds the Diesel r2d2 pool described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError::InvalidPoolSize`] for a zero pool size and
    /// [`StoreConfigError::Pool`] when the initial connections fail.
    pub fn build_pool(&self) -> Result<BoardPgPool, StoreConfigError> {
        if self.max_pool_size == 0 {
            return Err(StoreConfigError::InvalidPoolSize("0".to_owned()));
        }
        let manager = ConnectionManager::<PgConnection>::new(self.database_url.as_str());
        let pool = Pool::builder()
            .max_size(self.max_pool_size)
            .connection_timeout(self.connection_timeout)
            .build(manager)?;
        tracing::info!(max_pool_size = self.max_pool_size, "postgres pool ready");
        Ok(pool)
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, StoreConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| StoreConfigError::InvalidPoolSize(raw.to_owned()))
}

/// Failures raised by the blocking execution wrapper itself.
#[derive(Debug, Error)]
pub enum BlockingError {
    /// No pooled connection could be obtained.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    /// The blocking task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Runs a Diesel operation on a pooled connection inside
/// [`tokio::task::spawn_blocking`].
pub(crate) async fn run_blocking<F, T, E>(pool: &BoardPgPool, f: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<BlockingError> + Send + 'static,
{
    let pool_handle = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool_handle.get().map_err(|err| E::from(BlockingError::Pool(err)))?;
        f(&mut connection)
    })
    .await
    .map_err(|err| E::from(BlockingError::Join(err)))?
}
