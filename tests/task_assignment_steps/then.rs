//! Then steps for task assignment BDD scenarios.

use super::world::{TaskAssignmentWorld, run_async};
use rstest_bdd_macros::then;
use taskhub::task::{domain::TaskStatus, services::TaskLifecycleError};

#[then("the task is assigned to the registered user")]
fn task_assigned_to_registered_user(world: &TaskAssignmentWorld) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    let user = world.current_user()?;
    let stored = run_async(world.tasks.get(task.id()))?;

    eyre::ensure!(
        stored.assigned_to() == Some(user.id()),
        "expected assignee {}, found {:?}",
        user.id(),
        stored.assigned_to()
    );
    Ok(())
}

#[then("the registered user has {count:usize} assigned task")]
fn registered_user_task_count(
    world: &TaskAssignmentWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    let user = world.current_user()?;
    let owned = run_async(world.tasks.list_by_assignee(user.id()))?;

    eyre::ensure!(
        owned.len() == count,
        "expected {count} assigned tasks, found {}",
        owned.len()
    );
    Ok(())
}

#[then("the assignment fails with a user not found error")]
fn assignment_fails_with_user_not_found(world: &TaskAssignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing assignment result"))?;
    let ghost = world
        .unknown_user
        .ok_or_else(|| eyre::eyre!("missing unknown user id"))?;

    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::UserNotFound(id)) if *id == ghost),
        "expected user not found error, got {result:?}"
    );
    Ok(())
}

#[then("the task has no assignee")]
fn task_has_no_assignee(world: &TaskAssignmentWorld) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    let stored = run_async(world.tasks.get(task.id()))?;

    eyre::ensure!(
        stored.assigned_to().is_none(),
        "expected no assignee, found {:?}",
        stored.assigned_to()
    );
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskAssignmentWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.current_task()?;
    let stored = run_async(world.tasks.get(task.id()))?;

    eyre::ensure!(
        stored.status() == expected,
        "expected status {expected}, found {}",
        stored.status()
    );
    Ok(())
}

#[then("the status update fails with an invalid status error")]
fn status_update_fails(world: &TaskAssignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status update result"))?;

    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::InvalidStatus(_))),
        "expected invalid status error, got {result:?}"
    );
    Ok(())
}
