//! User data model.

use chrono::{DateTime, Utc};

use super::{EmailAddress, Name, UserId};

/// Validated fields for a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: Name,
    pub email: EmailAddress,
}

/// Stored application user.
///
/// ## Invariants
/// - `id` is assigned by the store and never reused within a process.
/// - `email` is unique across users, ignoring ASCII case.
/// - `created_at == updated_at`; records are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: Name,
    email: EmailAddress,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Build a stored user from its draft, identifier, and insert time.
    pub fn new(id: UserId, draft: NewUser, inserted_at: DateTime<Utc>) -> Self {
        let NewUser { name, email } = draft;
        Self {
            id,
            name,
            email,
            created_at: inserted_at,
            updated_at: inserted_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Contact address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Insert time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last update time; equal to the insert time.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
