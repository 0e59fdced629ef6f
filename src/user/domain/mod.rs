//! Domain model for users that tasks can be assigned to.

mod error;
mod ids;
mod user;

pub use error::UserDomainError;
pub use ids::{EmailAddress, UserId, UserName};
pub use user::{PersistedUserData, User, UserChanges};
