//! Service layer for team member lookup and maintenance.

use crate::user::{
    domain::{EmailAddress, NewUser, User, UserDomainError, UserId, UserName, UserPatch},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    name: String,
    email: String,
    avatar: Option<String>,
}

impl CreateUserRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Sets the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Request payload for editing a team member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    name: Option<String>,
    email: Option<String>,
    avatar: Option<Option<String>>,
}

impl UpdateUserRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replaces or clears the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = Some(avatar);
        self
    }

    fn into_patch(self) -> Result<UserPatch, UserDomainError> {
        let mut patch = UserPatch::new();
        if let Some(name) = self.name {
            patch = patch.with_name(UserName::new(name)?);
        }
        if let Some(email) = self.email {
            patch = patch.with_email(EmailAddress::new(email)?);
        }
        if let Some(avatar) = self.avatar {
            patch = patch.with_avatar(avatar);
        }
        Ok(patch)
    }
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Team member lookup and maintenance service.
#[derive(Clone)]
pub struct UserDirectory<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserDirectory<R>
where
    R: UserRepository,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new team member.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] for an empty name or malformed
    /// email before any store call, or [`UserDirectoryError::Repository`]
    /// when persistence fails.
    pub async fn create(&self, request: CreateUserRequest) -> UserDirectoryResult<User> {
        let CreateUserRequest {
            name,
            email,
            avatar,
        } = request;
        let mut new_user = NewUser::new(UserName::new(name)?, EmailAddress::new(email)?);
        if let Some(reference) = avatar {
            new_user = new_user.with_avatar(reference);
        }
        let user = self.repository.create(&new_user).await?;
        tracing::info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    /// Returns every team member.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn list(&self) -> UserDirectoryResult<Vec<User>> {
        Ok(self.repository.list_all().await?)
    }

    /// Finds a team member by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn find(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns team members whose name or email contains `query`.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn search(&self, query: &str) -> UserDirectoryResult<Vec<User>> {
        let users = self.repository.list_all().await?;
        Ok(users.into_iter().filter(|user| user.matches(query)).collect())
    }

    /// Applies a validated partial update.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] for invalid replacement values
    /// or [`UserDirectoryError::Repository`] when the user does not exist or
    /// persistence fails.
    pub async fn update(&self, id: UserId, request: UpdateUserRequest) -> UserDirectoryResult<User> {
        let patch = request.into_patch()?;
        Ok(self.repository.update(id, &patch).await?)
    }

    /// Removes a team member, returning `false` when nothing was removed.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when persistence fails.
    pub async fn delete(&self, id: UserId) -> UserDirectoryResult<bool> {
        let removed = self.repository.delete(id).await?;
        tracing::info!(user_id = %id, removed, "user delete processed");
        Ok(removed)
    }
}
