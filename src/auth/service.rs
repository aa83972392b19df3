//! Authentication service
//!
//! Core business logic for password login and token issuance.

use std::sync::Arc;
use thiserror::Error;

use crate::db::UserStore;
use crate::models::UserRecord;

use super::jwt::{generate_access_token, JwtError};
use super::password::verify_password;

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Password verification failed: {0}")]
    HashError(String),
}

impl From<mongodb::error::Error> for AuthError {
    fn from(e: mongodb::error::Error) -> Self {
        AuthError::DatabaseError(e.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        AuthError::TokenError(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AuthError::HashError(e.to_string())
    }
}

/// Token issued on successful login
#[derive(Debug)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

impl IssuedToken {
    /// Value for the `Authorization` response header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    store: Arc<UserStore>,
    jwt_secret: String,
    access_token_ttl_seconds: i64,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(store: Arc<UserStore>, jwt_secret: String, access_token_ttl_seconds: i64) -> Self {
        Self {
            store,
            jwt_secret,
            access_token_ttl_seconds,
        }
    }

    /// Verify an account's password and issue an access token.
    ///
    /// `login` is the account email. The token subject is the same email, so
    /// protected handlers can resolve the caller without another credential
    /// exchange.
    pub async fn login(&self, login: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let user = self
            .store
            .find_by_email(login)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &user.login.hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token =
            generate_access_token(login, &self.jwt_secret, self.access_token_ttl_seconds)?;

        Ok(IssuedToken {
            access_token,
            expires_in: self.access_token_ttl_seconds,
        })
    }

    /// Resolve the account behind a verified token subject
    pub async fn current_user(&self, username: &str) -> Result<UserRecord, AuthError> {
        self.store
            .find_by_email(username)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Get JWT secret (for middleware access)
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
