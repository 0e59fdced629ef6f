//! User aggregate root.

use super::{EmailAddress, UserId, UserName};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Field overwrites applied by [`User::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    /// Replacement name, if any.
    pub name: Option<UserName>,
    /// Replacement email, if any.
    pub email: Option<EmailAddress>,
}

/// User aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted display name.
    pub name: UserName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user.
    #[must_use]
    pub fn new(name: UserName, email: EmailAddress, clock: &impl Clock) -> Self {
        // Stored timestamps keep microsecond precision.
        let timestamp = clock.utc().trunc_subsecs(6);
        Self {
            id: UserId::new(),
            name,
            email,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
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
    pub fn update(&mut self, changes: UserChanges, clock: &impl Clock) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        self.updated_at = clock.utc().trunc_subsecs(6);
    }

    /// Returns `true` when the stored email matches `local@domain.tld`.
    #[must_use]
    pub fn has_valid_email(&self) -> bool {
        self.email.is_well_formed()
    }
}
