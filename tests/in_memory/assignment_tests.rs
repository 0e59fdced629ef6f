//! In-memory integration tests for task assignment.

use super::helpers::{Services, services};
use rstest::rstest;
use taskhub::task::services::{CreateTaskRequest, TaskLifecycleError};
use taskhub::user::domain::UserId;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_are_found_by_assignee(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("Alice").await?;
    let bob = services.register("Bob").await?;

    for title in ["Review PR", "Fix build"] {
        let task = services
            .tasks
            .create(CreateTaskRequest::new(title, "Assigned to Alice"))
            .await?;
        services.tasks.assign(task.id(), alice.id()).await?;
    }
    let unassigned = services
        .tasks
        .create(CreateTaskRequest::new("Triage", "Nobody yet"))
        .await?;

    let alice_tasks = services.tasks.list_by_assignee(alice.id()).await?;
    eyre::ensure!(alice_tasks.len() == 2, "alice should own two tasks");
    eyre::ensure!(
        alice_tasks
            .iter()
            .all(|task| task.assigned_to() == Some(alice.id())),
        "every listed task should be assigned to alice"
    );
    eyre::ensure!(
        services.tasks.list_by_assignee(bob.id()).await?.is_empty(),
        "bob should own nothing"
    );
    eyre::ensure!(
        services.tasks.get(unassigned.id()).await?.assigned_to().is_none(),
        "unrelated task should stay unassigned"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigning_to_unknown_user_fails(services: Services) -> Result<(), eyre::Report> {
    let task = services
        .tasks
        .create(CreateTaskRequest::new("Orphan", "No owner"))
        .await?;
    let ghost = UserId::new();

    let result = services.tasks.assign(task.id(), ghost).await;

    let Err(err) = result else {
        return Err(eyre::eyre!("assignment to unknown user should fail"));
    };
    eyre::ensure!(
        matches!(err, TaskLifecycleError::UserNotFound(id) if id == ghost),
        "unexpected error: {err}"
    );
    eyre::ensure!(
        err.to_string() == format!("User with id {ghost} not found"),
        "unexpected message: {err}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_tasks_leave_the_assignee_index(services: Services) -> Result<(), eyre::Report> {
    let carol = services.register("Carol").await?;
    let task = services
        .tasks
        .create(CreateTaskRequest::new("Temporary", "Will be removed"))
        .await?;
    services.tasks.assign(task.id(), carol.id()).await?;

    services.tasks.delete(task.id()).await?;

    eyre::ensure!(
        services.tasks.list_by_assignee(carol.id()).await?.is_empty(),
        "deleted task should not be listed for its assignee"
    );
    Ok(())
}
