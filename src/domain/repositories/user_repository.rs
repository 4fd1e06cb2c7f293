//! Repository trait for user account data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the user store.
///
/// `users.name` is UNIQUE; a second insert with the same name fails with a
/// conflict rather than silently overwriting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user record.
    ///
    /// The password field of `new_user` is stored verbatim and must already
    /// be a digest.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the name is already registered.
    /// Returns [`AppError::Storage`] on other database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError>;
}
