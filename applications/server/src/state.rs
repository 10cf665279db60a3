/// Shared application state
use crate::config::StoreSettings;
use std::sync::Arc;
use vision_core::UserService;
use vision_storage::{InMemoryUserService, UserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}

/// Build the user service the server starts with
///
/// `seed = false` (or `serve --empty`) starts from an empty store.
pub fn build_user_service(settings: &StoreSettings) -> InMemoryUserService {
    let store = if settings.seed {
        UserStore::seeded()
    } else {
        UserStore::new()
    };
    InMemoryUserService::new(store)
}
