//! Structured logging bootstrap.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    util::TryInitError,
};

/// Errors returned while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The default filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`.
///
/// # Errors
///
/// Returns [`TelemetryError`] when `default_filter` is not a valid directive
/// or a subscriber has already been installed.
pub fn init(default_filter: &str) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()?;
    Ok(())
}
