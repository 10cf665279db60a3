//! Test helpers and fixtures for storage integration tests

#![allow(dead_code)]

use vision_core::types::UserInput;
use vision_storage::{InMemoryUserService, UserStore};

/// Service over an empty store
pub fn empty_service() -> InMemoryUserService {
    InMemoryUserService::new(UserStore::new())
}

/// Service over the two sample accounts (ids 1 and 2)
pub fn seeded_service() -> InMemoryUserService {
    InMemoryUserService::seeded()
}

/// Active user payload
pub fn input(name: &str, email: &str) -> Option<UserInput> {
    Some(UserInput::new(name, email))
}
