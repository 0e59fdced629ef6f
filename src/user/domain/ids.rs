//! Identifier and validated scalar types for the user domain.

use super::UserDomainError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is covered by unit tests"
)]
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Unique identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for UserId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Longest name accepted by the `users.name` column.
    pub const MAX_CHARS: usize = 255;

    /// Creates a validated user name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] when the value is blank and
    /// [`UserDomainError::NameTooLong`] when it exceeds [`Self::MAX_CHARS`]
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(UserDomainError::EmptyName);
        }
        let length = raw.chars().count();
        if length > Self::MAX_CHARS {
            return Err(UserDomainError::NameTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty email address.
///
/// Construction only rejects blank input. Shape checks are separate so the
/// uniqueness lookup can run before the format check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Longest address accepted by the `users.email` column.
    pub const MAX_CHARS: usize = 255;

    /// Creates a non-empty email address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyEmail`] when the value is blank and
    /// [`UserDomainError::EmailTooLong`] when it exceeds [`Self::MAX_CHARS`]
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(UserDomainError::EmptyEmail);
        }
        let length = raw.chars().count();
        if length > Self::MAX_CHARS {
            return Err(UserDomainError::EmailTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(raw))
    }

    /// Returns `true` when the address matches `local@domain.tld`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        EMAIL_PATTERN.is_match(&self.0)
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
