//! Port contracts for the user directory.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

#[cfg(test)]
pub use repository::MockUserRepository;
