//! HTTP middleware for the Roster API

pub mod auth;
mod security;
mod tracing;

pub use self::auth::AuthenticatedUser;
pub use self::security::security_headers;
pub use self::tracing::request_tracing;
