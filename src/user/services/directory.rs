//! Service layer for user registration and lookup.

use crate::user::{
    domain::{EmailAddress, User, UserDomainError, UserId, UserName},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    name: String,
    email: String,
}

impl CreateUserRequest {
    /// Creates a request with the required user fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Another user already holds the email address.
    #[error("User with email {0} already exists")]
    DuplicateEmail(EmailAddress),
    /// The user does not exist.
    #[error("User with id {0} not found")]
    NotFound(UserId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user directory service operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory orchestration service.
pub struct UserDirectoryService<R, C>
where
    R: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for UserDirectoryService<R, C>
where
    R: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> UserDirectoryService<R, C>
where
    R: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn list(&self) -> UserDirectoryResult<Vec<User>> {
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] when no user has the
    /// identifier.
    pub async fn get(&self, id: UserId) -> UserDirectoryResult<User> {
        debug!(user_id = %id, "looking up user");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserDirectoryError::NotFound(id))
    }

    /// Registers a new user.
    ///
    /// Checks run in a fixed order: blank name, blank email, duplicate
    /// email, malformed email.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] for blank or malformed input,
    /// [`UserDirectoryError::DuplicateEmail`] when the address is taken, or
    /// [`UserDirectoryError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateUserRequest) -> UserDirectoryResult<User> {
        let name = UserName::new(request.name)?;
        let email = EmailAddress::new(request.email)?;

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(UserDirectoryError::DuplicateEmail(email));
        }

        let user = User::new(name, email, &*self.clock);
        if !user.has_valid_email() {
            return Err(UserDomainError::InvalidEmail.into());
        }

        self.repository.store(&user).await.map_err(|err| match err {
            UserRepositoryError::DuplicateEmail(taken) => UserDirectoryError::DuplicateEmail(taken),
            other => UserDirectoryError::Repository(other),
        })?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }
}
