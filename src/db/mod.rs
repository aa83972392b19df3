//! MongoDB access for the user collection
//!
//! Every operation opens its own client, runs a single query against the
//! `users` collection, and lets the connection drop with the handle. Handlers
//! therefore share no database state.

use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    options::FindOptions,
    Client, Collection,
};

use crate::models::UserRecord;

const USERS_COLLECTION: &str = "users";

/// Handle to the user collection. Holds connection parameters only; a fresh
/// client is opened per operation.
#[derive(Debug, Clone)]
pub struct UserStore {
    uri: String,
    database_name: String,
}

impl UserStore {
    pub fn new(uri: String, database_name: String) -> Self {
        Self { uri, database_name }
    }

    /// Open a fresh client and resolve the user collection
    async fn collection(&self) -> Result<Collection<UserRecord>, mongodb::error::Error> {
        let client = Client::with_uri_str(&self.uri).await?;
        Ok(client
            .database(&self.database_name)
            .collection(USERS_COLLECTION))
    }

    /// Find a user by their `login.uuid`
    pub async fn find_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<UserRecord>, mongodb::error::Error> {
        let users = self.collection().await?;
        users.find_one(doc! { "login.uuid": uuid }, None).await
    }

    /// Find a user by their email address
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, mongodb::error::Error> {
        let users = self.collection().await?;
        users.find_one(doc! { "email": email }, None).await
    }

    /// List users with limit/skip pagination
    pub async fn list(
        &self,
        limit: u64,
        skip: u64,
    ) -> Result<Vec<UserRecord>, mongodb::error::Error> {
        let users = self.collection().await?;
        let options = FindOptions::builder()
            .limit(limit as i64)
            .skip(skip)
            .build();
        let cursor = users.find(None, options).await?;
        cursor.try_collect().await
    }

    /// Insert a single user document
    pub async fn insert(&self, record: &UserRecord) -> Result<(), mongodb::error::Error> {
        let users = self.collection().await?;
        users.insert_one(record, None).await?;
        Ok(())
    }

    /// Bulk-insert seeded user documents; returns the inserted count
    pub async fn insert_many(
        &self,
        records: &[UserRecord],
    ) -> Result<usize, mongodb::error::Error> {
        let users = self.collection().await?;
        let result = users.insert_many(records, None).await?;
        Ok(result.inserted_ids.len())
    }

    /// Replace the document matched by `login.uuid`; returns whether a
    /// document was matched
    pub async fn replace(
        &self,
        uuid: &str,
        record: &UserRecord,
    ) -> Result<bool, mongodb::error::Error> {
        let users = self.collection().await?;
        let result = users
            .replace_one(doc! { "login.uuid": uuid }, record, None)
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Delete the document matched by `login.uuid`; returns whether a
    /// document was deleted
    pub async fn delete(&self, uuid: &str) -> Result<bool, mongodb::error::Error> {
        let users = self.collection().await?;
        let deleted = users
            .find_one_and_delete(doc! { "login.uuid": uuid }, None)
            .await?;
        Ok(deleted.is_some())
    }

    /// Ping the server (health check)
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        let client = Client::with_uri_str(&self.uri).await?;
        client
            .database(&self.database_name)
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }
}
