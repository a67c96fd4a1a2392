//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for persistence and caching, plus the code that
//! builds them from configuration.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - DynamoDB, PostgreSQL, and in-memory repositories
//! - [`bootstrap`] - Collaborator construction at cold start

pub mod bootstrap;
pub mod cache;
pub mod persistence;
