//! Seeding service
//!
//! Drives the linear fetch -> hash -> remap -> insert -> write-file chain
//! behind GET /random-data.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::auth::hash_password;
use crate::db::UserStore;
use crate::error::ApiError;
use crate::models::UserRecord;

use super::model::RandomUserBatch;

/// Seeding errors
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Fetching random users failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Serializing seed output failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Writing seed output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SeedError> for ApiError {
    fn from(e: SeedError) -> Self {
        match e {
            SeedError::Fetch(err) => ApiError::ExternalServiceError(err.to_string()),
            SeedError::Database(err) => ApiError::DatabaseError(err.to_string()),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

/// Outcome of one seeding run
#[derive(Debug)]
pub struct SeedSummary {
    pub fetched: usize,
    pub inserted: usize,
    pub output_path: PathBuf,
}

/// Seeding service for populating the user collection
pub struct SeedService {
    http: reqwest::Client,
    store: Arc<UserStore>,
    source_url: String,
    seed_count: u32,
    bcrypt_cost: u32,
    output_path: PathBuf,
}

impl SeedService {
    /// Create a new seeding service instance
    pub fn new(
        store: Arc<UserStore>,
        source_url: String,
        seed_count: u32,
        bcrypt_cost: u32,
        output_path: PathBuf,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            store,
            source_url,
            seed_count,
            bcrypt_cost,
            output_path,
        }
    }

    /// Fetch a batch of generated users, hash their passwords, remap to the
    /// stored shape, bulk-insert, and dump the mapped records to disk.
    pub async fn run(&self) -> Result<SeedSummary, SeedError> {
        let batch: RandomUserBatch = self
            .http
            .get(&self.source_url)
            .query(&[("results", self.seed_count)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let fetched = batch.results.len();
        tracing::info!(count = fetched, url = %self.source_url, "Fetched random users");

        let mut records: Vec<UserRecord> = Vec::with_capacity(fetched);
        for user in batch.results {
            let hash = hash_password(&user.login.password, self.bcrypt_cost)?;
            records.push(user.into_record(hash));
        }

        let inserted = self.store.insert_many(&records).await?;

        // The file gets the mapped records, hashes included but never the
        // plaintext passwords the generator served.
        let json = serde_json::to_string_pretty(&records)?;
        tokio::fs::write(&self.output_path, json).await?;

        tracing::info!(
            fetched,
            inserted,
            output = %self.output_path.display(),
            "Seeding run complete"
        );

        Ok(SeedSummary {
            fetched,
            inserted,
            output_path: self.output_path.clone(),
        })
    }
}
