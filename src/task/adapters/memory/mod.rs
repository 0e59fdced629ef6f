//! In-memory adapter for the task repository port.
//!
//! Suitable for tests and for running the service without a database.

mod task;

pub use task::InMemoryTaskRepository;
