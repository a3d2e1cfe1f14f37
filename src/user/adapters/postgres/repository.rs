//! `PostgreSQL` repository implementation for the user directory.

use super::{
    models::{NewUserRow, UserChangeset, UserRow},
    schema::users,
};
use crate::store::{BoardPgPool, run_blocking};
use crate::user::{
    domain::{EmailAddress, NewUser, User, UserId, UserName, UserPatch},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: BoardPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_blocking(&self.pool, f).await
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(|connection| {
            users::table
                .order(users::id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?
                .into_iter()
                .map(row_to_user)
                .collect()
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .find(id.value())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn create(&self, user: &NewUser) -> UserRepositoryResult<User> {
        let new_row = NewUserRow {
            name: user.name().as_str().to_owned(),
            email: user.email().as_str().to_owned(),
            avatar: user.avatar().map(str::to_owned),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            row_to_user(row)
        })
        .await
    }

    async fn update(&self, id: UserId, patch: &UserPatch) -> UserRepositoryResult<User> {
        if patch.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or(UserRepositoryError::NotFound(id));
        }
        let changeset = UserChangeset {
            name: patch.name().map(|name| name.as_str().to_owned()),
            email: patch.email().map(|email| email.as_str().to_owned()),
            avatar: patch.avatar().cloned(),
        };
        self.run_blocking(move |connection| {
            let row = diesel::update(users::table.find(id.value()))
                .set(&changeset)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?
                .ok_or(UserRepositoryError::NotFound(id))?;
            row_to_user(row)
        })
        .await
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(users::table.find(id.value()))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        name,
        email,
        avatar,
    } = row;
    let user_name = UserName::new(name).map_err(UserRepositoryError::persistence)?;
    let email_address = EmailAddress::new(email).map_err(UserRepositoryError::persistence)?;
    Ok(User::from_persisted(
        UserId::new(id),
        user_name,
        email_address,
        avatar,
    ))
}
