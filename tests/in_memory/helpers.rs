//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskhub::{
    task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService},
    user::{
        adapters::memory::InMemoryUserRepository,
        domain::User,
        services::{CreateUserRequest, UserDirectoryService},
    },
};

/// Task service over in-memory repositories.
pub type TaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryUserRepository, DefaultClock>;

/// User service over an in-memory repository.
pub type UserService = UserDirectoryService<InMemoryUserRepository, DefaultClock>;

/// Task and user services sharing one user store.
pub struct Services {
    pub tasks: TaskService,
    pub users: UserService,
}

impl Services {
    /// Registers a user with a unique address derived from `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub async fn register(&self, name: &str) -> Result<User, eyre::Report> {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        Ok(self.users.create(CreateUserRequest::new(name, email)).await?)
    }
}

/// Creates services over fresh repositories.
#[fixture]
pub fn services() -> Services {
    let users = Arc::new(InMemoryUserRepository::new());
    let clock = Arc::new(DefaultClock);
    Services {
        tasks: TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&users),
            Arc::clone(&clock),
        ),
        users: UserDirectoryService::new(users, clock),
    }
}
