//! Taskhub: task and user management over a REST API.
//!
//! Tasks carry a title, description, lifecycle status, optional due date
//! and optional assignee. Users carry a name and a unique email address.
//!
//! # Architecture
//!
//! Taskhub follows hexagonal architecture principles:
//!
//! - **Domain**: Validated value types and entities with no infrastructure
//!   dependencies
//! - **Ports**: Repository traits the services depend on
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Use-case orchestration over the ports
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, assignment and status changes
//! - [`user`]: User directory with email uniqueness
//! - [`http`]: Axum router, handlers and error translation
//! - [`config`], [`telemetry`], [`db`], [`app`]: Service bootstrap

pub mod app;
pub mod config;
pub mod db;
pub mod http;
pub mod task;
pub mod telemetry;
pub mod user;
