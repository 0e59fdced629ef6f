//! Boundary translation from service errors to HTTP responses.

use crate::task::{ports::TaskRepositoryError, services::TaskLifecycleError};
use crate::user::{ports::UserRepositoryError, services::UserDirectoryError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// Message sent in place of internal error details.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error kinds the HTTP surface distinguishes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed entity does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The request failed input validation.
    #[error("{0}")]
    Validation(String),
    /// The request conflicts with domain rules.
    #[error("{0}")]
    InvalidOperation(String),
    /// Anything else; details are logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub status_code: u16,
    /// Human-readable message.
    pub message: String,
    /// RFC 3339 time the error was produced.
    pub timestamp: String,
}

impl ApiError {
    /// Returns the status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::NotFound(message)
            | Self::Validation(message)
            | Self::InvalidOperation(message) => message.clone(),
            Self::Internal(_) => INTERNAL_MESSAGE.to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = ErrorBody {
            status_code: status.as_u16(),
            message: self.public_message(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(format!("Task with id {id} not found")),
            TaskRepositoryError::DuplicateTask(_) => Self::InvalidOperation(err.to_string()),
            TaskRepositoryError::Persistence(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<UserRepositoryError> for ApiError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound(id) => Self::NotFound(format!("User with id {id} not found")),
            UserRepositoryError::DuplicateEmail(email) => {
                Self::Validation(format!("User with email {email} already exists"))
            }
            UserRepositoryError::DuplicateUser(_) => Self::InvalidOperation(err.to_string()),
            UserRepositoryError::Persistence(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(_) | TaskLifecycleError::InvalidStatus(_) => {
                Self::Validation(err.to_string())
            }
            TaskLifecycleError::TaskNotFound(_) | TaskLifecycleError::UserNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            TaskLifecycleError::Repository(inner) => inner.into(),
            TaskLifecycleError::UserRepository(inner) => inner.into(),
        }
    }
}

impl From<UserDirectoryError> for ApiError {
    fn from(err: UserDirectoryError) -> Self {
        match err {
            UserDirectoryError::Domain(_) | UserDirectoryError::DuplicateEmail(_) => {
                Self::Validation(err.to_string())
            }
            UserDirectoryError::NotFound(_) => Self::NotFound(err.to_string()),
            UserDirectoryError::Repository(inner) => inner.into(),
        }
    }
}
