//! In-memory integration tests for the user directory.

use super::helpers::{Services, services};
use rstest::rstest;
use taskhub::user::{
    domain::UserDomainError,
    services::{CreateUserRequest, UserDirectoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_users_are_listed(services: Services) -> Result<(), eyre::Report> {
    let dave = services.register("Dave").await?;
    let erin = services.register("Erin").await?;

    let listed = services.users.list().await?;
    eyre::ensure!(listed.len() == 2, "expected two users");
    eyre::ensure!(listed.contains(&dave), "dave should be listed");
    eyre::ensure!(listed.contains(&erin), "erin should be listed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_is_checked_before_format(services: Services) -> Result<(), eyre::Report> {
    services
        .users
        .create(CreateUserRequest::new("First", "shared@example.com"))
        .await?;

    let duplicate = services
        .users
        .create(CreateUserRequest::new("Second", "shared@example.com"))
        .await;
    eyre::ensure!(
        matches!(duplicate, Err(UserDirectoryError::DuplicateEmail(_))),
        "second registration should hit the uniqueness check"
    );

    let malformed = services
        .users
        .create(CreateUserRequest::new("Third", "not-an-email"))
        .await;
    eyre::ensure!(
        matches!(
            malformed,
            Err(UserDirectoryError::Domain(UserDomainError::InvalidEmail))
        ),
        "malformed address should be rejected"
    );
    eyre::ensure!(services.users.list().await?.len() == 1, "only one user stored");
    Ok(())
}
