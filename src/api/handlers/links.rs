//! Handlers for link management endpoints (create, delete, preflight).

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use crate::api::dto::link::CreateLinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /links` (also accepted as `PUT /links`)
///
/// # Request Body
///
/// ```json
/// { "long": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": "aZ3kP9qX",
///   "originalURL": "https://example.com/some/long/path",
///   "createdAt": "2025-01-02T03:04:05.678Z"
/// }
/// ```
///
/// The body is decoded as JSON regardless of `Content-Type`, since API
/// Gateway clients often send it as `text/plain` or form-encoded.
///
/// # Errors
///
/// - 400 if the body is not valid JSON or the URL fails validation
/// - 500 if the repository or cache write fails
pub async fn create_link_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateLinkRequest = serde_json::from_slice(&body)?;

    let link = state.link_service.build_link(payload.long)?;
    state.link_service.create(&link).await?;

    info!(id = %link.id, "Created short link");

    Ok((StatusCode::OK, Json(link)))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /links/{id}`
///
/// Succeeds with 204 whether or not the id existed.
///
/// # Errors
///
/// Returns 500 if the repository delete or cache invalidation fails.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.link_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Answers CORS preflight requests for `/links` and `/links/{id}`.
///
/// The headers themselves come from [`crate::api::middleware::cors`].
pub async fn cors_preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
