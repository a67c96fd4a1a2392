//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into [`crate::application`] service
//! calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Request and health report types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Per-operation routers

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
