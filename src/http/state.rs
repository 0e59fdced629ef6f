//! Shared handler state.

use crate::task::{
    adapters::memory::InMemoryTaskRepository, ports::TaskRepository,
    services::TaskLifecycleService,
};
use crate::user::{
    adapters::memory::InMemoryUserRepository, ports::UserRepository,
    services::UserDirectoryService,
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Task service over type-erased repositories.
pub type TaskService = TaskLifecycleService<dyn TaskRepository, dyn UserRepository, DefaultClock>;

/// User service over a type-erased repository.
pub type UserService = UserDirectoryService<dyn UserRepository, DefaultClock>;

/// Services reachable from every handler.
#[derive(Clone)]
pub struct AppState {
    tasks: TaskService,
    users: UserService,
}

impl AppState {
    /// Wires both services to the given repositories.
    ///
    /// The task service reads users through `users` to check assignees.
    #[must_use]
    pub fn new(tasks: Arc<dyn TaskRepository>, users: Arc<dyn UserRepository>) -> Self {
        let clock = Arc::new(DefaultClock);
        Self {
            tasks: TaskLifecycleService::new(tasks, Arc::clone(&users), Arc::clone(&clock)),
            users: UserDirectoryService::new(users, clock),
        }
    }

    /// Wires both services to fresh in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    /// Returns the user service.
    #[must_use]
    pub const fn users(&self) -> &UserService {
        &self.users
    }
}
