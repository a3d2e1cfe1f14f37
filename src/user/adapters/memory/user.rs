//! In-memory repository for the user directory.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{NewUser, User, UserId, UserPatch},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<BTreeMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with existing records.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let records = users.into_iter().map(|user| (user.id(), user)).collect();
        Self {
            state: Arc::new(RwLock::new(records)),
        }
    }
}

fn poisoned(err: &impl fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(format!("lock poisoned: {err}")))
}

fn identifiers_exhausted() -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other("no user identifier is left after the largest stored one"))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.get(&id).cloned())
    }

    async fn create(&self, user: &NewUser) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let next_id = state
            .keys()
            .next_back()
            .map_or(Some(1), |last| last.value().checked_add(1))
            .ok_or_else(identifiers_exhausted)?;
        let created = User::from_new(UserId::new(next_id), user);
        state.insert(created.id(), created.clone());
        Ok(created)
    }

    async fn update(&self, id: UserId, patch: &UserPatch) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let user = state.get_mut(&id).ok_or(UserRepositoryError::NotFound(id))?;
        user.apply(patch);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        Ok(state.remove(&id).is_some())
    }
}
