//! In-memory user service

use crate::store::UserStore;
use async_trait::async_trait;
use chrono::Utc;
use vision_core::{Result, User, UserId, UserInput, UserService, VisionError};

/// `UserService` backed by an owned `UserStore`
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    store: UserStore,
}

impl InMemoryUserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Service over the two sample accounts
    pub fn seeded() -> Self {
        Self::new(UserStore::seeded())
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.store.all().await)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.store.find(id).await)
    }

    async fn create_user(&self, user: Option<UserInput>) -> Result<User> {
        let user = user.ok_or_else(|| VisionError::InvalidArgument("user".to_string()))?;

        if let Some(err) = user.validate().into_iter().next() {
            return Err(err.into());
        }

        let created = self.store.insert(user, Utc::now()).await;
        tracing::debug!(id = created.id, "Stored new user");
        Ok(created)
    }

    async fn update_user(&self, id: UserId, user: Option<UserInput>) -> Result<bool> {
        let user = user.ok_or_else(|| VisionError::InvalidArgument("user".to_string()))?;

        // No email check on update; callers validate the payload first.
        Ok(self.store.update(id, user).await)
    }

    async fn delete_user(&self, id: UserId) -> Result<bool> {
        Ok(self.store.remove(id).await)
    }

    async fn user_exists(&self, id: UserId) -> Result<bool> {
        Ok(self.store.contains(id).await)
    }
}
