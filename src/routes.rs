//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST|PUT /links`      - Create a short link
//! - `DELETE   /links/{id}` - Delete a short link
//! - `OPTIONS  /links[/{id}]` - CORS preflight
//! - `GET      /{id}`       - Short link redirect
//! - `GET      /health`     - Health check: storage, cache
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (local server only)

use crate::api::middleware::tracing;
use crate::api::routes::{create_routes, delete_routes, health_routes, redirect_routes};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the full application router used by the local server.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(create_routes())
        .merge(delete_routes())
        .merge(health_routes())
        .merge(redirect_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Wraps a single operation's routes for a Lambda function.
///
/// API Gateway routes each operation to its own function, so the function
/// only needs the routes it serves.
pub fn function_router(routes: Router<AppState>, state: AppState) -> Router {
    routes.with_state(state).layer(tracing::layer())
}
