//! Repository port for team member persistence.

use crate::store::BlockingError;
use crate::user::domain::{NewUser, User, UserId, UserPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user ordered by identifier.
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Stores a new user; the store assigns the identifier.
    async fn create(&self, user: &NewUser) -> UserRepositoryResult<User>;

    /// Merges a partial update and returns the confirmed record.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not exist.
    async fn update(&self, id: UserId, patch: &UserPatch) -> UserRepositoryResult<User>;

    /// Deletes a user, returning `false` when nothing was removed.
    async fn delete(&self, id: UserId) -> UserRepositoryResult<bool>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<BlockingError> for UserRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}
