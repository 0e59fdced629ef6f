//! Service layer for task creation, editing, assignment and status updates.

use crate::task::{
    domain::{
        DueDateChange, ParseTaskStatusError, Task, TaskChanges, TaskDescription, TaskDomainError,
        TaskId, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::{
    domain::UserId,
    ports::{UserRepository, UserRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: None,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for editing an existing task.
///
/// Fields left unset keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskRequest {
    title: Option<String>,
    description: Option<String>,
    due_date: DueDateChange,
}

impl EditTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = DueDateChange::Set(due_date);
        self
    }

    /// Removes the due date.
    #[must_use]
    pub const fn clearing_due_date(mut self) -> Self {
        self.due_date = DueDateChange::Clear;
        self
    }

    fn into_changes(self) -> Result<TaskChanges, TaskDomainError> {
        Ok(TaskChanges {
            title: self.title.map(TaskTitle::new).transpose()?,
            description: self.description.map(TaskDescription::new).transpose()?,
            due_date: self.due_date,
        })
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The requested status is not part of the lifecycle.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The task does not exist.
    #[error("Task with id {0} not found")]
    TaskNotFound(TaskId),
    /// The user named by an assignment does not exist.
    #[error("User with id {0} not found")]
    UserNotFound(UserId),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// User repository operation failed.
    #[error(transparent)]
    UserRepository(#[from] UserRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task orchestration service.
///
/// Repository parameters may be unsized so the HTTP layer can hold trait
/// objects.
pub struct TaskLifecycleService<R, U, C>
where
    R: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> Clone for TaskLifecycleService<R, U, C>
where
    R: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, U, C> TaskLifecycleService<R, U, C>
where
    R: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            users,
            clock,
        }
    }

    /// Lists every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Lists the tasks currently assigned to `user_id`.
    ///
    /// The user is not required to exist; a deleted user may still own
    /// tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_by_assignee(&self, user_id: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_assignee(user_id).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when no task has the
    /// identifier.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        debug!(task_id = %id, "looking up task");
        self.load(id).await
    }

    /// Creates a new task in the `TODO` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title or description is
    /// blank, or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = TaskDescription::new(request.description)?;

        let task = Task::new(title, description, request.due_date, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Overwrites the fields set on `request`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist and [`TaskLifecycleError::Domain`] when a provided field is blank.
    pub async fn edit(&self, id: TaskId, request: EditTaskRequest) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        let changes = request.into_changes()?;
        task.update(changes, &*self.clock);
        self.repository.update(&task).await?;
        info!(task_id = %id, "task edited");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.load(id).await?;
        self.repository.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Assigns a task to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] or
    /// [`TaskLifecycleError::UserNotFound`], checked in that order.
    pub async fn assign(&self, id: TaskId, user_id: UserId) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(TaskLifecycleError::UserNotFound(user_id));
        }

        task.assign_to(user_id, &*self.clock);
        self.repository.update(&task).await?;
        info!(task_id = %id, user_id = %user_id, "task assigned");
        Ok(task)
    }

    /// Moves a task to the status named by `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist, then [`TaskLifecycleError::InvalidStatus`] when `status` is not
    /// one of `TODO`, `IN_PROGRESS` or `DONE`.
    pub async fn update_status(&self, id: TaskId, status: &str) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        let next = TaskStatus::try_from(status)?;

        task.update_status(next, &*self.clock);
        self.repository.update(&task).await?;
        info!(task_id = %id, status = %next, "task status updated");
        Ok(task)
    }

    async fn load(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(id))
    }
}
