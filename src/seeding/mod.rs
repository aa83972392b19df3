//! Dataset seeding from the public random-user generator

mod model;
mod service;

pub use model::{RandomUser, RandomUserBatch, SourceLogin};
pub use service::{SeedError, SeedService, SeedSummary};
