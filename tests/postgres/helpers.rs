//! Shared helpers for `PostgreSQL` integration tests.

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use once_cell::sync::OnceCell;
use taskhub::{
    db::{self, PgPool},
    task::{
        adapters::postgres::PostgresTaskRepository,
        domain::{Task, TaskDescription, TaskTitle},
    },
    user::{
        adapters::postgres::PostgresUserRepository,
        domain::{EmailAddress, User, UserName},
    },
};
use uuid::Uuid;

/// Environment variable naming the test database.
pub const DATABASE_URL_ENV: &str = "TASKHUB_TEST_DATABASE_URL";

/// Pool shared by every test in the binary; the schema is applied once.
static POOL: OnceCell<PgPool> = OnceCell::new();

/// Repositories sharing one pool.
pub struct PostgresRepositories {
    pub tasks: PostgresTaskRepository,
    pub users: PostgresUserRepository,
}

/// Connects to the test database, applying the schema on first use.
///
/// Returns `Ok(None)` when no database is configured.
///
/// # Errors
///
/// Returns an error if the database cannot be reached or prepared.
pub async fn repositories() -> Result<Option<PostgresRepositories>, eyre::Report> {
    let Ok(url) = std::env::var(DATABASE_URL_ENV) else {
        return Ok(None);
    };

    let pool = tokio::task::spawn_blocking(move || {
        POOL.get_or_try_init(|| {
            let pool = db::build_pool(&url, 4)?;
            db::apply_schema(&pool)?;
            Ok::<_, db::DatabaseError>(pool)
        })
        .cloned()
    })
    .await??;

    Ok(Some(PostgresRepositories {
        tasks: PostgresTaskRepository::new(pool.clone()),
        users: PostgresUserRepository::new(pool),
    }))
}

/// Builds an unsaved task with a unique title.
///
/// # Errors
///
/// Returns an error if the generated fields fail validation.
pub fn sample_task(due_date: Option<DateTime<Utc>>) -> Result<Task, eyre::Report> {
    Ok(Task::new(
        TaskTitle::new(format!("Task {}", Uuid::new_v4()))?,
        TaskDescription::new("Stored in PostgreSQL")?,
        due_date,
        &DefaultClock,
    ))
}

/// Builds an unsaved user with a unique email address.
///
/// # Errors
///
/// Returns an error if the generated fields fail validation.
pub fn sample_user() -> Result<User, eyre::Report> {
    Ok(User::new(
        UserName::new("Postgres User")?,
        EmailAddress::new(format!("{}@example.com", Uuid::new_v4()))?,
        &DefaultClock,
    ))
}

/// Returns `true` when two instants agree at the column's microsecond
/// precision. Caller-supplied due dates are stored without truncation.
#[must_use]
pub fn same_instant(left: DateTime<Utc>, right: DateTime<Utc>) -> bool {
    left.timestamp_micros() == right.timestamp_micros()
}
