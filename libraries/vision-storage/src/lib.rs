//! Vision API Storage
//!
//! In-memory, non-persistent storage for user records.
//!
//! # Architecture
//!
//! - **`UserStore`**: owns the record collection behind an async read/write
//!   lock; ID allocation happens inside the write lock so concurrent creates
//!   never collide
//! - **`InMemoryUserService`**: implements `vision_core::UserService` on top
//!   of a store it owns exclusively
//!
//! # Example
//!
//! ```rust
//! use vision_core::{UserInput, UserService};
//! use vision_storage::{InMemoryUserService, UserStore};
//!
//! # async fn example() -> vision_core::Result<()> {
//! let service = InMemoryUserService::new(UserStore::new());
//!
//! let user = service
//!     .create_user(Some(UserInput::new("Alice", "alice@example.com")))
//!     .await?;
//! assert_eq!(user.id, 1);
//! # Ok(())
//! # }
//! ```

mod store;
pub mod users;

pub use store::UserStore;
pub use users::InMemoryUserService;
