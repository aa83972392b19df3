//! Seeding route

use axum::{routing::get, Router};

use crate::handlers::seed;
use crate::state::AppState;

pub fn seed_routes() -> Router<AppState> {
    Router::new().route("/random-data", get(seed::seed_users))
}
