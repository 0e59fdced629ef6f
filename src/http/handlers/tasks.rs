//! Task API handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use super::{parse_task_id, parse_user_id};
use crate::http::{error::ApiError, state::AppState};
use crate::task::{
    domain::{Task, TaskStatus},
    services::{CreateTaskRequest, EditTaskRequest},
};
use crate::user::domain::UserId;

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Create task request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Optional due date, RFC 3339 or `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "optional_due_date")]
    pub due_date: Option<DateTime<Utc>>,
}

/// Edit task request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTaskBody {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// `None` keeps the due date, `Some(None)` clears it.
    #[serde(default, deserialize_with = "present_due_date")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// Assign task request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskBody {
    /// Identifier of the user to assign.
    pub user_id: String,
}

/// Status update request
#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    /// Target status: `TODO`, `IN_PROGRESS` or `DONE`.
    pub status: String,
}

/// Task response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Assigned user, if any.
    pub assigned_to: Option<UserId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status(),
            due_date: task.due_date(),
            assigned_to: task.assigned_to(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
///
/// A bare date means midnight UTC on that day.
fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

fn optional_due_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_due_date(&raw).ok_or_else(|| {
                <D::Error as de::Error>::custom(format!(
                    "dueDate must be an ISO 8601 date or date-time, got {raw}"
                ))
            })
        })
        .transpose()
}

/// Distinguishes an explicit `null` from an absent field.
fn present_due_date<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_due_date(deserializer).map(Some)
}

impl EditTaskBody {
    fn into_request(self) -> EditTaskRequest {
        let mut request = EditTaskRequest::new();
        if let Some(title) = self.title {
            request = request.with_title(title);
        }
        if let Some(description) = self.description {
            request = request.with_description(description);
        }
        match self.due_date {
            None => request,
            Some(None) => request.clearing_due_date(),
            Some(Some(due_date)) => request.with_due_date(due_date),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks
pub async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.tasks().list().await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let task = state.tasks().get(task_id).await?;
    Ok(Json(task.into()))
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let Json(body) = payload?;
    let mut request = CreateTaskRequest::new(body.title, body.description);
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }

    let task = state.tasks().create(request).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// PUT /tasks/{id}
pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EditTaskBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(body) = payload?;
    let task = state.tasks().edit(task_id, body.into_request()).await?;
    Ok(Json(task.into()))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let task_id = parse_task_id(&id)?;
    state.tasks().delete(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /tasks/{id}/assign
pub async fn assign_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AssignTaskBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(body) = payload?;
    if body.user_id.trim().is_empty() {
        return Err(ApiError::Validation("userId should not be empty".to_owned()));
    }
    let user_id = match parse_user_id(&body.user_id) {
        Ok(user_id) => user_id,
        Err(err) => {
            // A missing task is reported ahead of an unknown user.
            state.tasks().get(task_id).await?;
            return Err(err);
        }
    };
    let task = state.tasks().assign(task_id, user_id).await?;
    Ok(Json(task.into()))
}

/// PUT /tasks/{id}/status
pub async fn update_task_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(body) = payload?;
    let task = state.tasks().update_status(task_id, &body.status).await?;
    Ok(Json(task.into()))
}
