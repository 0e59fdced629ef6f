//! Task aggregate root and related task lifecycle types.

use super::{ParseTaskStatusError, TaskDescription, TaskId, TaskTitle};
use crate::user::domain::UserId;
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an edit treats the due date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueDateChange {
    /// Leave the current due date untouched.
    #[default]
    Keep,
    /// Remove the due date.
    Clear,
    /// Replace the due date.
    Set(DateTime<Utc>),
}

/// Field overwrites applied by [`Task::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title, if any.
    pub title: Option<TaskTitle>,
    /// Replacement description, if any.
    pub description: Option<TaskDescription>,
    /// Due date handling.
    pub due_date: DueDateChange,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new unassigned task in [`TaskStatus::Todo`].
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: TaskDescription,
        due_date: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Self {
        // Stored timestamps keep microsecond precision.
        let timestamp = clock.utc().trunc_subsecs(6);
        Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::Todo,
            due_date,
            assigned_to: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            assigned_to: data.assigned_to,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrites the provided fields and bumps `updated_at`.
    pub fn update(&mut self, changes: TaskChanges, clock: &impl Clock) {
        let TaskChanges {
            title,
            description,
            due_date,
        } = changes;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        match due_date {
            DueDateChange::Keep => {}
            DueDateChange::Clear => self.due_date = None,
            DueDateChange::Set(value) => self.due_date = Some(value),
        }
        self.touch(clock);
    }

    /// Assigns the task to a user.
    ///
    /// The caller is responsible for checking that the user exists; the
    /// aggregate keeps no reference back to the user record.
    pub fn assign_to(&mut self, user_id: UserId, clock: &impl Clock) {
        self.assigned_to = Some(user_id);
        self.touch(clock);
    }

    /// Moves the task to `status`.
    ///
    /// Any status may follow any other, including itself.
    pub fn update_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Returns `true` when the due date has passed and the task is not done.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        self.is_overdue_at(clock.utc())
    }

    /// Evaluates [`Self::is_overdue`] against an explicit instant.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.due_date
            .is_some_and(|due| due < now && self.status != TaskStatus::Done)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().trunc_subsecs(6);
    }
}
