//! `PostgreSQL` repository implementation for user storage.

use super::{
    models::{NewUserRow, UserChangesetRow, UserRow},
    schema::users,
};
use crate::user::{
    domain::{EmailAddress, PersistedUserData, User, UserId, UserName},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by user adapters.
pub type UserPgPool = Pool<ConnectionManager<PgConnection>>;

/// Name of the unique index guarding `users.email`.
const EMAIL_UNIQUE_INDEX: &str = "idx_users_email_unique";

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: UserPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: UserPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let user_id = user.id();
        let email = user.email().clone();
        let new_row = to_new_row(user);

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_email_unique_violation(info.as_ref()) =>
                    {
                        UserRepositoryError::DuplicateEmail(email.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicateUser(user_id)
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let user_id = user.id();
        let email = user.email().clone();
        let changeset = UserChangesetRow {
            name: user.name().as_str().to_owned(),
            email: user.email().as_str().to_owned(),
            updated_at: user.updated_at(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(users::table.find(user_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_email_unique_violation(info.as_ref()) =>
                    {
                        UserRepositoryError::DuplicateEmail(email.clone())
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;
            if affected == 0 {
                return Err(UserRepositoryError::NotFound(user_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(users::table.find(id.into_inner()))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            if affected == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .find(id.into_inner())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let lookup_email = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::email.eq(lookup_email))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_all(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .order((users::created_at.asc(), users::id.asc()))
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }
}

fn to_new_row(user: &User) -> NewUserRow {
    NewUserRow {
        id: user.id().into_inner(),
        name: user.name().as_str().to_owned(),
        email: user.email().as_str().to_owned(),
        created_at: user.created_at(),
        updated_at: user.updated_at(),
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        name,
        email,
        created_at,
        updated_at,
    } = row;

    let data = PersistedUserData {
        id: UserId::from_uuid(id),
        name: UserName::new(name).map_err(UserRepositoryError::persistence)?,
        email: EmailAddress::new(email).map_err(UserRepositoryError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(User::from_persisted(data))
}

fn is_email_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == EMAIL_UNIQUE_INDEX)
}
