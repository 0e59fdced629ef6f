//! Domain model for task management.
//!
//! Tasks carry a validated title and description, a fixed three-value
//! status, an optional due date and an optional assignee. Infrastructure
//! concerns stay outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskDescription, TaskId, TaskTitle};
pub use task::{DueDateChange, PersistedTaskData, Task, TaskChanges, TaskStatus};
