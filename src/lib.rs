//! # Snipline
//!
//! A serverless URL shortener: one AWS Lambda function per operation behind
//! API Gateway, with DynamoDB storage and an optional Redis cache.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Link`](domain::entities::Link) record and repository trait
//! - **Application Layer** ([`application`]) - [`LinkService`](application::services::LinkService)
//! - **Infrastructure Layer** ([`infrastructure`]) - DynamoDB, PostgreSQL, in-memory, and Redis
//! - **API Layer** ([`api`]) - Handlers, DTOs, per-operation routers
//!
//! ## Binaries
//!
//! - `create-link`, `delete-link`, `redirect` - Lambda functions
//! - `snipline` - Local server with every route
//! - `snipline-admin` - Command-line link management
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_BACKEND=memory
//! cargo run
//!
//! curl -X POST localhost:3000/links -d '{"long":"https://example.com/some/long/path"}' \
//!     -H 'Content-Type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::CacheService;
    pub use crate::state::AppState;
}
