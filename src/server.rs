//! Process runtimes: the local HTTP server and the Lambda function runner.

use crate::config::Config;
use crate::infrastructure::bootstrap::build_link_service;
use crate::routes::{app_router, function_router};
use crate::state::AppState;

use anyhow::Result;
use axum::Router;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the local HTTP server with every route.
///
/// Initializes:
/// - Link repository (DynamoDB, PostgreSQL with migrations, or in-memory)
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(build_link_service(&config).await?);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Runs a Lambda function serving `routes`.
///
/// Collaborators are built once here, at cold start, and reused by every
/// invocation the runtime dispatches to this process.
///
/// # Errors
///
/// Returns an error if storage initialization fails or the Lambda runtime
/// stops with an error.
pub async fn run_function(
    config: Config,
    routes: Router<AppState>,
) -> Result<(), lambda_http::Error> {
    let state = AppState::new(build_link_service(&config).await?);

    lambda_http::run(function_router(routes, state)).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
