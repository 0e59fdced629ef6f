//! In-memory adapter for the user repository port.

mod user;

pub use user::InMemoryUserRepository;
