//! User service contract

use crate::error::Result;
use crate::types::{User, UserId, UserInput};
use async_trait::async_trait;

/// CRUD operations over the user collection
///
/// The HTTP layer only ever talks to this trait, so the backing store can be
/// swapped (or faked in tests) without touching the handlers.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get all users in store order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Get user by ID, `None` if absent
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Create a new user
    ///
    /// Fails with `InvalidArgument` when `user` is `None` and with
    /// `Validation` when the email is missing or blank. The store assigns the
    /// ID and creation timestamp.
    async fn create_user(&self, user: Option<UserInput>) -> Result<User>;

    /// Overwrite name, email and active flag of an existing user
    ///
    /// Returns `Ok(false)` if no user has this ID. Fails with
    /// `InvalidArgument` when `user` is `None`.
    async fn update_user(&self, id: UserId, user: Option<UserInput>) -> Result<bool>;

    /// Delete a user, returning `Ok(false)` if it did not exist
    async fn delete_user(&self, id: UserId) -> Result<bool>;

    /// Check whether a user with this ID exists
    async fn user_exists(&self, id: UserId) -> Result<bool>;
}
