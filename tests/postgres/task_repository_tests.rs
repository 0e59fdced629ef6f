//! Task repository tests against `PostgreSQL`.

use super::helpers::{repositories, same_instant, sample_task, sample_user};
use chrono::{Duration, Utc};
use mockable::DefaultClock;
use rstest::rstest;
use taskhub::{
    task::{
        domain::{TaskChanges, TaskId, TaskStatus, TaskTitle},
        ports::{TaskRepository, TaskRepositoryError},
    },
    user::ports::UserRepository,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_task_round_trips() -> Result<(), eyre::Report> {
    let Some(repos) = repositories().await? else {
        return Ok(());
    };
    let task = sample_task(Some(Utc::now() + Duration::days(2)))?;

    repos.tasks.store(&task).await?;
    let loaded = repos
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("stored task should be found"))?;

    eyre::ensure!(loaded.id() == task.id(), "id mismatch");
    eyre::ensure!(loaded.title() == task.title(), "title mismatch");
    eyre::ensure!(loaded.description() == task.description(), "description mismatch");
    eyre::ensure!(loaded.status() == TaskStatus::Todo, "status mismatch");
    eyre::ensure!(loaded.assigned_to().is_none(), "unexpected assignee");
    eyre::ensure!(
        matches!(
            (loaded.due_date(), task.due_date()),
            (Some(a), Some(b)) if same_instant(a, b)
        ),
        "due date mismatch"
    );
    eyre::ensure!(loaded.created_at() == task.created_at(), "created_at mismatch");
    eyre::ensure!(loaded.updated_at() == task.updated_at(), "updated_at mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_store_is_rejected() -> Result<(), eyre::Report> {
    let Some(repos) = repositories().await? else {
        return Ok(());
    };
    let task = sample_task(None)?;
    repos.tasks.store(&task).await?;

    let result = repos.tasks.store(&task).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()),
        "expected duplicate task error, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_changes_and_clears_due_date() -> Result<(), eyre::Report> {
    let Some(repos) = repositories().await? else {
        return Ok(());
    };
    let clock = DefaultClock;
    let user = sample_user()?;
    repos.users.store(&user).await?;
    let mut task = sample_task(Some(Utc::now()))?;
    repos.tasks.store(&task).await?;

    task.update(
        TaskChanges {
            title: Some(TaskTitle::new("Renamed in PostgreSQL")?),
            due_date: taskhub::task::domain::DueDateChange::Clear,
            ..TaskChanges::default()
        },
        &clock,
    );
    task.assign_to(user.id(), &clock);
    task.update_status(TaskStatus::InProgress, &clock);
    repos.tasks.update(&task).await?;

    let loaded = repos
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("updated task should be found"))?;
    eyre::ensure!(loaded.title().as_str() == "Renamed in PostgreSQL", "title not updated");
    eyre::ensure!(loaded.due_date().is_none(), "due date not cleared");
    eyre::ensure!(loaded.assigned_to() == Some(user.id()), "assignee not stored");
    eyre::ensure!(loaded.status() == TaskStatus::InProgress, "status not stored");

    let owned = repos.tasks.find_by_assignee(user.id()).await?;
    eyre::ensure!(
        owned.iter().map(taskhub::task::domain::Task::id).eq([task.id()]),
        "assignee lookup should return the task"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_rows_are_reported() -> Result<(), eyre::Report> {
    let Some(repos) = repositories().await? else {
        return Ok(());
    };
    let ghost = sample_task(None)?;

    eyre::ensure!(
        repos.tasks.find_by_id(TaskId::new()).await?.is_none(),
        "unknown id should not be found"
    );
    eyre::ensure!(
        matches!(
            repos.tasks.update(&ghost).await,
            Err(TaskRepositoryError::NotFound(_))
        ),
        "update of a missing task should fail"
    );
    eyre::ensure!(
        matches!(
            repos.tasks.delete(ghost.id()).await,
            Err(TaskRepositoryError::NotFound(_))
        ),
        "delete of a missing task should fail"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_row() -> Result<(), eyre::Report> {
    let Some(repos) = repositories().await? else {
        return Ok(());
    };
    let task = sample_task(None)?;
    repos.tasks.store(&task).await?;

    repos.tasks.delete(task.id()).await?;

    eyre::ensure!(
        repos.tasks.find_by_id(task.id()).await?.is_none(),
        "deleted task should not be found"
    );
    eyre::ensure!(
        !repos
            .tasks
            .find_all()
            .await?
            .iter()
            .any(|stored| stored.id() == task.id()),
        "deleted task should not be listed"
    );
    Ok(())
}
