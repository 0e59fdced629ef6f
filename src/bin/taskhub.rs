//! `taskhub` service binary.
//!
//! Reads configuration from flags and the environment, installs logging,
//! wires the configured storage and serves the REST API until Ctrl-C.

use clap::Parser;
use taskhub::{app, config::Config, http, telemetry};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::parse();
    telemetry::init(&config.log_level)?;

    let state = app::build_state(&config).await?;
    let listener = TcpListener::bind(config.bind).await?;
    http::serve(listener, state).await?;
    Ok(())
}
