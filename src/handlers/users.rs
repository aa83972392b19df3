//! User CRUD handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::{hash_password, AuthError};
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{
    CreateUserRequest, ListUsersParams, UserProfile, UserRecord, UserSummary,
};
use crate::state::AppState;

/// GET /user/:id - Fetch one user's profile by their login uuid
pub async fn get_user(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    let record = state
        .store
        .find_by_uuid(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No user with id {}", id)))?;

    Ok(Json(record.into()))
}

/// GET /users - Paginated listing of user ids and usernames
pub async fn list_users(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let records = state.store.list(params.limit(), params.skip()).await?;
    let summaries = records.iter().map(UserSummary::from).collect();
    Ok(Json(summaries))
}

/// POST /user - Create a user, hashing the supplied plaintext password
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()?;

    let hash = hash_password(&req.login.password, state.bcrypt_cost)?;
    let record = req.into_record(hash);
    state.store.insert(&record).await?;

    Ok(StatusCode::OK)
}

/// PUT /user/:id - Replace the whole document matched by login uuid
pub async fn replace_user(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(record): Json<UserRecord>,
) -> Result<StatusCode, ApiError> {
    let matched = state.store.replace(&id, &record).await?;
    if !matched {
        return Err(ApiError::NotFound(format!("No user with id {}", id)));
    }

    Ok(StatusCode::OK)
}

/// DELETE /user/:id - Remove the document matched by login uuid
pub async fn delete_user(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.store.delete(&id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("No user with id {}", id)));
    }

    Ok(StatusCode::OK)
}

/// PATCH /user/me - Resolve the caller from their token and return their profile
pub async fn current_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserProfile>, ApiError> {
    let record = state
        .auth_service
        .current_user(&user.username)
        .await
        .map_err(|e| match e {
            AuthError::UserNotFound => {
                ApiError::NotFound("No account for this token".to_string())
            }
            AuthError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            other => ApiError::InternalError(other.to_string()),
        })?;

    Ok(Json(record.into()))
}
