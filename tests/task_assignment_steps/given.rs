//! Given steps for task assignment BDD scenarios.

use super::world::{TaskAssignmentWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskhub::task::services::CreateTaskRequest;
use taskhub::user::services::CreateUserRequest;

#[given(r#"a registered user "{name}" with email "{email}""#)]
fn registered_user(
    world: &mut TaskAssignmentWorld,
    name: String,
    email: String,
) -> Result<(), eyre::Report> {
    let user = run_async(world.users.create(CreateUserRequest::new(name, email)))
        .wrap_err("register user for assignment scenario")?;
    world.last_user = Some(user);
    Ok(())
}

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskAssignmentWorld, title: String) -> Result<(), eyre::Report> {
    let task = run_async(
        world
            .tasks
            .create(CreateTaskRequest::new(title, "Scenario task")),
    )
    .wrap_err("create task for assignment scenario")?;
    world.task = Some(task);
    Ok(())
}

#[given("the task has been assigned to the registered user")]
fn task_already_assigned(world: &mut TaskAssignmentWorld) -> Result<(), eyre::Report> {
    let task_id = world.current_task()?.id();
    let user_id = world.current_user()?.id();
    let assigned = run_async(world.tasks.assign(task_id, user_id))
        .wrap_err("assign task in scenario setup")?;
    world.task = Some(assigned);
    Ok(())
}
