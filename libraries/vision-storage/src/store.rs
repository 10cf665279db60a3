//! Locked in-memory user collection

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use vision_core::types::{User, UserId, UserInput};

/// Authoritative collection of user records
///
/// Records keep insertion order. Nothing outside this type holds references
/// into the collection; reads hand out clones.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the two sample accounts
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self::from_users(vec![
            User::with_id(
                1,
                UserInput::new("John Doe", "john@example.com"),
                now - Duration::days(30),
            ),
            User::with_id(
                2,
                UserInput::new("Jane Smith", "jane@example.com"),
                now - Duration::days(20),
            ),
        ])
    }

    /// Create a store from existing records
    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Snapshot of all records in store order
    pub async fn all(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Find a record by ID
    pub async fn find(&self, id: UserId) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    /// Whether a record with this ID exists
    pub async fn contains(&self, id: UserId) -> bool {
        self.users.read().await.iter().any(|u| u.id == id)
    }

    /// Append a new record, allocating its ID
    ///
    /// The ID is the current maximum plus one, or 1 for an empty store.
    /// Allocation and append share one write lock.
    pub async fn insert(&self, input: UserInput, created_date: DateTime<Utc>) -> User {
        let mut users = self.users.write().await;
        let id = next_id(&users);
        let user = User::with_id(id, input, created_date);
        users.push(user.clone());
        user
    }

    /// Overwrite the mutable fields of a record in place
    ///
    /// Returns `false` if no record has this ID.
    pub async fn update(&self, id: UserId, input: UserInput) -> bool {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.apply(input);
                true
            }
            None => false,
        }
    }

    /// Remove a record, returning `false` if it was not present
    pub async fn remove(&self, id: UserId) -> bool {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn next_id(users: &[User]) -> UserId {
    users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_follows_maximum_not_length() {
        let now = Utc::now();
        let users = vec![
            User::with_id(7, UserInput::new("A", "a@x.com"), now),
            User::with_id(3, UserInput::new("B", "b@x.com"), now),
        ];
        assert_eq!(next_id(&users), 8);
    }

    #[tokio::test]
    async fn seeded_store_holds_two_past_records() {
        let store = UserStore::seeded();
        let users = store.all().await;

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name.as_deref(), Some("John Doe"));
        assert_eq!(users[1].id, 2);
        assert_eq!(users[1].email, "jane@example.com");
        assert!(users.iter().all(|u| u.is_active));
        assert!(users.iter().all(|u| u.created_date < Utc::now()));
        assert_ne!(users[0].email, users[1].email);
    }

    #[tokio::test]
    async fn remove_missing_record_is_false() {
        let store = UserStore::seeded();
        assert!(!store.remove(99).await);
        assert_eq!(store.len().await, 2);
    }
}
