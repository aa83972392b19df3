//! Route definitions for the Roster API

mod auth;
mod seed;
mod users;

pub use auth::auth_routes;
pub use seed::seed_routes;
pub use users::user_routes;
