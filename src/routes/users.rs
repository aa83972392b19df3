//! User route definitions

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::users;
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/user", post(users::create_user))
        .route("/user/me", patch(users::current_user))
        .route(
            "/user/:id",
            get(users::get_user)
                .put(users::replace_user)
                .delete(users::delete_user),
        )
}
