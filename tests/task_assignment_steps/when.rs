//! When steps for task assignment BDD scenarios.

use super::world::{TaskAssignmentWorld, run_async};
use rstest_bdd_macros::when;
use taskhub::user::domain::UserId;

#[when("the task is assigned to the registered user")]
fn assign_to_registered_user(world: &mut TaskAssignmentWorld) -> Result<(), eyre::Report> {
    let task_id = world.current_task()?.id();
    let user_id = world.current_user()?.id();
    let result = run_async(world.tasks.assign(task_id, user_id));
    world.record(result);
    Ok(())
}

#[when("the task is assigned to an unknown user")]
fn assign_to_unknown_user(world: &mut TaskAssignmentWorld) -> Result<(), eyre::Report> {
    let task_id = world.current_task()?.id();
    let ghost = UserId::new();
    world.unknown_user = Some(ghost);
    let result = run_async(world.tasks.assign(task_id, ghost));
    world.record(result);
    Ok(())
}

#[when(r#"the task status is set to "{status}""#)]
fn set_status(world: &mut TaskAssignmentWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.current_task()?.id();
    let result = run_async(world.tasks.update_status(task_id, &status));
    world.record(result);
    Ok(())
}
