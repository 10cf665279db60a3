//! Vision API Core
//!
//! Domain types, validation, and the service contract shared by the storage
//! layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User` (stored record) and `UserInput` (request payload)
//! - **Core Traits**: `UserService`, the CRUD contract the HTTP layer talks to
//! - **Error Handling**: Unified `VisionError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vision_core::types::UserInput;
//!
//! let input = UserInput::new("Alice", "alice@example.com");
//! assert!(input.validate().is_empty());
//!
//! let blank = UserInput::new("Bob", "   ");
//! assert_eq!(blank.validate()[0].field, "email");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VisionError};
pub use service::UserService;
pub use types::{FieldError, User, UserId, UserInput};
