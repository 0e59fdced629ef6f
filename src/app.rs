//! Startup wiring from configuration to handler state.

use crate::config::{Config, StorageBackend};
use crate::db::{self, DatabaseError, PgPool};
use crate::http::AppState;
use crate::task::adapters::postgres::PostgresTaskRepository;
use crate::user::adapters::postgres::PostgresUserRepository;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors raised while preparing the service for requests.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The database could not be reached or prepared.
    #[error(transparent)]
    Database(#[from] DatabaseError),
    /// The blocking setup task panicked or was cancelled.
    #[error("database setup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds handler state for the configured storage backend.
///
/// For `PostgreSQL` the pool is opened eagerly and, when schema
/// synchronisation is enabled, the bundled schema is applied before any
/// request is served.
///
/// # Errors
///
/// Returns [`StartupError`] when the database cannot be prepared.
pub async fn build_state(config: &Config) -> Result<AppState, StartupError> {
    match config.storage {
        StorageBackend::Memory => {
            info!("using in-memory storage");
            Ok(AppState::in_memory())
        }
        StorageBackend::Postgres => {
            let pool = connect(config).await?;
            info!(
                host = %config.database.host,
                database = %config.database.name,
                "using PostgreSQL storage"
            );
            Ok(AppState::new(
                Arc::new(PostgresTaskRepository::new(pool.clone())),
                Arc::new(PostgresUserRepository::new(pool)),
            ))
        }
    }
}

async fn connect(config: &Config) -> Result<PgPool, StartupError> {
    let url = config.database.connection_url();
    let pool_size = config.database.pool_size;
    let synchronize = config.database.synchronize;

    let pool = tokio::task::spawn_blocking(move || {
        let pool = db::build_pool(&url, pool_size)?;
        if synchronize {
            db::apply_schema(&pool)?;
        }
        Ok::<_, DatabaseError>(pool)
    })
    .await??;

    if synchronize {
        info!("database schema synchronised");
    }
    Ok(pool)
}
