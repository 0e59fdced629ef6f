//! `PostgreSQL` connection pooling and schema bootstrap.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// Shared `PostgreSQL` pool; the task and user adapters both accept it.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent schema for the `users` and `tasks` tables.
pub const SCHEMA_SQL: &str =
    include_str!("../migrations/2026-01-20-000000_create_users_and_tasks/up.sql");

/// Errors returned while preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The pool could not be built or a connection checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    /// A schema statement failed.
    #[error("schema error: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Builds a connection pool for `url`.
///
/// Blocks until the pool has opened its initial connections.
///
/// # Errors
///
/// Returns [`DatabaseError::Pool`] when the database cannot be reached.
pub fn build_pool(url: &str, max_size: u32) -> Result<PgPool, DatabaseError> {
    let manager = ConnectionManager::<PgConnection>::new(url);
    Ok(Pool::builder().max_size(max_size).build(manager)?)
}

/// Applies [`SCHEMA_SQL`] through a pooled connection.
///
/// # Errors
///
/// Returns [`DatabaseError`] when no connection is available or a statement
/// fails.
pub fn apply_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    let mut connection = pool.get()?;
    connection.batch_execute(SCHEMA_SQL)?;
    Ok(())
}
