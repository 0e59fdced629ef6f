//! HTTP request handlers, one submodule per resource.

pub mod tasks;
pub mod users;

use axum::{
    Json,
    extract::OriginalUri,
    http::Method,
};
use serde::Serialize;
use uuid::Uuid;

use super::error::ApiError;
use crate::task::domain::TaskId;
use crate::user::domain::UserId;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for unknown routes.
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("Cannot {method} {}", uri.path()))
}

/// Parses a path segment as a task id; anything else names no task.
pub(crate) fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    Uuid::parse_str(raw)
        .map(TaskId::from_uuid)
        .map_err(|_| ApiError::NotFound(format!("Task with id {raw} not found")))
}

/// Parses a path segment or body field as a user id.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    Uuid::parse_str(raw)
        .map(UserId::from_uuid)
        .map_err(|_| ApiError::NotFound(format!("User with id {raw} not found")))
}
