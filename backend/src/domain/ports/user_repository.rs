//! Port for user storage.

use async_trait::async_trait;

use crate::domain::{EmailAddress, NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Another user already holds this email address.
        DuplicateEmail { email: String } => "email {email} is already registered",
        /// The backing store could not serve the request.
        Unavailable { message: String } => "user repository unavailable: {message}",
    }
}

/// Storage contract for users.
///
/// Adapters assign the identifier and timestamps on insert and reject a
/// second user with the same email (ASCII case-insensitive).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return the stored record.
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by email address, ignoring ASCII case.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserRepositoryError>;
}
