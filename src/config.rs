//! Command-line and environment configuration for the service binary.
//!
//! Every option can be given as a flag or through the environment variable
//! named next to it. Database settings fall back to the discrete
//! `DATABASE_*` variables when no `DATABASE_URL` is supplied.

use clap::{Args, Parser, ValueEnum};
use std::net::SocketAddr;

/// Top-level service configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskhub")]
#[command(version)]
#[command(about = "Task and user management REST service")]
pub struct Config {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "TASKHUB_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Persistence backend for tasks and users.
    #[arg(long, env = "TASKHUB_STORAGE", value_enum, default_value_t = StorageBackend::Memory)]
    pub storage: StorageBackend,

    /// Default log filter, overridden by `RUST_LOG` when set.
    #[arg(long, env = "TASKHUB_LOG", default_value = "info")]
    pub log_level: String,

    /// `PostgreSQL` connection settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

/// Persistence backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Process-local maps; data is lost on exit.
    Memory,
    /// `PostgreSQL` through Diesel.
    Postgres,
}

/// `PostgreSQL` connection settings.
#[derive(Debug, Clone, Args)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the discrete settings.
    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub url: Option<String>,

    /// Database host.
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    /// Database port.
    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database role.
    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "taskmanager")]
    pub user: String,

    /// Database password.
    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "taskmanager",
        hide_env_values = true
    )]
    pub password: String,

    /// Database name.
    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "taskmanager_db")]
    pub name: String,

    /// Maximum pooled connections.
    #[arg(long = "database-pool-size", env = "DATABASE_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,

    /// Apply the bundled schema SQL at startup.
    #[arg(long = "synchronize-schema", env = "DATABASE_SYNCHRONIZE")]
    pub synchronize: bool,
}

impl DatabaseConfig {
    /// Returns the explicit URL, or one composed from the discrete settings.
    #[must_use]
    pub fn connection_url(&self) -> String {
        self.url.clone().unwrap_or_else(|| self.composed_url())
    }

    /// Builds a URL from host, port, user, password and database name.
    #[must_use]
    pub fn composed_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}
