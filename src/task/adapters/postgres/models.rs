//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Full-row changeset for task updates.
///
/// `None` values are written as `NULL` so cleared due dates persist.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangesetRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<uuid::Uuid>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
