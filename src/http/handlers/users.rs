//! User API handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse_user_id;
use crate::http::{error::ApiError, state::AppState};
use crate::user::{domain::User, services::CreateUserRequest};

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserBody {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// User response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().as_str().to_owned(),
            email: user.email().as_str().to_owned(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users().list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_user_id(&id)?;
    let user = state.users().get(user_id).await?;
    Ok(Json(user.into()))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(body) = payload?;
    let user = state
        .users()
        .create(CreateUserRequest::new(body.name, body.email))
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}
