//! User repository tests against `PostgreSQL`.

use super::helpers::{repositories, sample_user};
use mockable::DefaultClock;
use rstest::rstest;
use taskhub::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_user_is_found_by_id_and_email() -> Result<(), eyre::Report> {
    let Some(repos) = repositories().await? else {
        return Ok(());
    };
    let user = sample_user()?;
    repos.users.store(&user).await?;

    let by_id = repos
        .users
        .find_by_id(user.id())
        .await?
        .ok_or_else(|| eyre::eyre!("stored user should be found by id"))?;
    let by_email = repos
        .users
        .find_by_email(user.email())
        .await?
        .ok_or_else(|| eyre::eyre!("stored user should be found by email"))?;

    eyre::ensure!(by_id.id() == user.id(), "id mismatch");
    eyre::ensure!(by_email.id() == user.id(), "email lookup mismatch");
    eyre::ensure!(by_id.name() == user.name(), "name mismatch");
    eyre::ensure!(by_id.created_at() == user.created_at(), "created_at mismatch");
    eyre::ensure!(by_id.updated_at() == user.updated_at(), "updated_at mismatch");
    eyre::ensure!(
        repos.users.find_all().await?.iter().any(|u| u.id() == user.id()),
        "stored user should be listed"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_user_with_same_email_is_rejected() -> Result<(), eyre::Report> {
    let Some(repos) = repositories().await? else {
        return Ok(());
    };
    let first = sample_user()?;
    repos.users.store(&first).await?;
    let second = User::new(first.name().clone(), first.email().clone(), &DefaultClock);

    let result = repos.users.store(&second).await;

    eyre::ensure!(
        matches!(result, Err(UserRepositoryError::DuplicateEmail(ref email)) if email == first.email()),
        "expected duplicate email error, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_user() -> Result<(), eyre::Report> {
    let Some(repos) = repositories().await? else {
        return Ok(());
    };
    let user = sample_user()?;
    repos.users.store(&user).await?;

    repos.users.delete(user.id()).await?;

    eyre::ensure!(
        repos.users.find_by_id(user.id()).await?.is_none(),
        "deleted user should not be found"
    );
    eyre::ensure!(
        matches!(
            repos.users.delete(UserId::new()).await,
            Err(UserRepositoryError::NotFound(_))
        ),
        "deleting an unknown user should fail"
    );
    Ok(())
}
