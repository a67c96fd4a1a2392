//! API route configuration.
//!
//! Each operation has its own router so a Lambda function can serve exactly
//! one route, while the local server merges them all.

use crate::api::handlers::{
    cors_preflight_handler, create_link_handler, delete_link_handler, health_handler,
    redirect_handler,
};
use crate::api::middleware::cors;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

/// Link creation.
///
/// - `POST    /links` - Create a short link
/// - `PUT     /links` - Same as `POST`
/// - `OPTIONS /links` - CORS preflight
///
/// Every response, errors included, carries the CORS headers.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/links",
            post(create_link_handler)
                .put(create_link_handler)
                .options(cors_preflight_handler),
        )
        .route_layer(middleware::map_response(cors::layer))
}

/// Link deletion.
///
/// - `DELETE  /links/{id}` - Delete a short link
/// - `OPTIONS /links/{id}` - CORS preflight
pub fn delete_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/links/{id}",
            delete(delete_link_handler).options(cors_preflight_handler),
        )
        .route_layer(middleware::map_response(cors::layer))
}

/// Redirect from a short link to its original URL.
///
/// - `GET /{id}`
pub fn redirect_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(redirect_handler))
}

/// Health report for storage and cache.
///
/// - `GET /health`
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
