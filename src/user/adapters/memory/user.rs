//! In-memory repository for users.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::user::{
    domain::{EmailAddress, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    email_index: HashMap<EmailAddress, UserId>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> UserRepositoryResult<RwLockReadGuard<'_, InMemoryUserState>> {
        self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> UserRepositoryResult<RwLockWriteGuard<'_, InMemoryUserState>> {
        self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Returns `true` when `email` belongs to a user other than `owner`.
fn email_taken_by_other(state: &InMemoryUserState, email: &EmailAddress, owner: UserId) -> bool {
    state
        .email_index
        .get(email)
        .is_some_and(|holder| *holder != owner)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.write()?;
        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        if state.email_index.contains_key(user.email()) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }

        state.email_index.insert(user.email().clone(), user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.write()?;
        let old_email = state
            .users
            .get(&user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?
            .email()
            .clone();
        if email_taken_by_other(&state, user.email(), user.id()) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }

        state.email_index.remove(&old_email);
        state.email_index.insert(user.email().clone(), user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.write()?;
        let removed = state
            .users
            .remove(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        state.email_index.remove(removed.email());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.read()?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let state = self.read()?;
        let user = state
            .email_index
            .get(email)
            .and_then(|user_id| state.users.get(user_id))
            .cloned();
        Ok(user)
    }

    async fn find_all(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.read()?;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().into_inner().cmp(&b.id().into_inner()))
        });
        Ok(users)
    }
}
