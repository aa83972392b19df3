//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthService;
use crate::db::UserStore;
use crate::seeding::SeedService;

/// Shared application state
///
/// Services only; per-request database clients are opened by the store, so
/// nothing here is mutable.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub auth_service: Arc<AuthService>,
    pub seed_service: Arc<SeedService>,
    /// bcrypt cost used when hashing passwords on user creation
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(
        store: Arc<UserStore>,
        auth_service: Arc<AuthService>,
        seed_service: Arc<SeedService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            store,
            auth_service,
            seed_service,
            bcrypt_cost,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<SeedService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.seed_service.clone()
    }
}
