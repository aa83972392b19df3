//! Seeding handler

use axum::{extract::State, http::StatusCode};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /random-data - Populate the collection from the random-user generator.
///
/// Returns an empty 200; the run's counts land in the logs.
pub async fn seed_users(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let summary = state.seed_service.run().await?;

    tracing::info!(
        fetched = summary.fetched,
        inserted = summary.inserted,
        "Seeded user collection"
    );

    Ok(StatusCode::OK)
}
