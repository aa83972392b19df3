//! API handlers for the Roster backend

pub mod auth;
pub mod seed;
pub mod users;

pub use auth::login;
pub use seed::seed_users;
pub use users::{create_user, current_user, delete_user, get_user, list_users, replace_user};

// Re-export AuthenticatedUser from middleware for handler use
pub use crate::middleware::AuthenticatedUser;
