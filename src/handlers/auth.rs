//! Authentication HTTP handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    Json,
};

use crate::auth::AuthError;
use crate::error::ApiError;
use crate::models::LoginRequest;
use crate::state::AppState;

/// POST /login - Verify credentials and hand back a bearer token.
///
/// The token travels in the `Authorization` response header, mirroring the
/// header clients send it back in.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1]), ApiError> {
    let token = state
        .auth_service
        .login(&req.login, &req.password)
        .await
        .map_err(|e| match e {
            AuthError::UserNotFound => {
                ApiError::NotFound(format!("No account for {}", req.login))
            }
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            other => ApiError::InternalError(other.to_string()),
        })?;

    tracing::info!(login = %req.login, expires_in = token.expires_in, "Login succeeded");

    Ok((StatusCode::OK, [(header::AUTHORIZATION, token.bearer())]))
}
