//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user name is empty after trimming.
    #[error("User name cannot be empty")]
    EmptyName,

    /// The user name does not fit the persisted column.
    #[error("User name must be at most {max} characters, got {length}")]
    NameTooLong {
        /// Character count of the rejected name.
        length: usize,
        /// Largest accepted character count.
        max: usize,
    },

    /// The email address is empty after trimming.
    #[error("User email cannot be empty")]
    EmptyEmail,

    /// The email address does not fit the persisted column.
    #[error("User email must be at most {max} characters, got {length}")]
    EmailTooLong {
        /// Character count of the rejected address.
        length: usize,
        /// Largest accepted character count.
        max: usize,
    },

    /// The email address does not look like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmail,
}
