//! Domain types

mod user;

pub use user::{FieldError, User, UserId, UserInput};
