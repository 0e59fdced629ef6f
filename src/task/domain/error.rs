//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// The task title does not fit the persisted column.
    #[error("Task title must be at most {max} characters, got {length}")]
    TitleTooLong {
        /// Character count of the rejected title.
        length: usize,
        /// Largest accepted character count.
        max: usize,
    },

    /// The task description is empty after trimming.
    #[error("Task description cannot be empty")]
    EmptyDescription,
}

/// Error returned while parsing task statuses from requests or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid status: {0}. Must be one of: TODO, IN_PROGRESS, DONE")]
pub struct ParseTaskStatusError(pub String);
