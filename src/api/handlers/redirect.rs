//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short link id to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Lookup goes through [`crate::application::services::LinkService::resolve`]:
/// cache first, then the repository, repopulating the cache on a miss.
///
/// # Errors
///
/// - 404 if the id is unknown
/// - 500 if the repository read fails
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.link_service.resolve(&id).await?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, original_url)],
    ))
}
