//! Data models for the Roster API

mod user;

pub use user::*;
