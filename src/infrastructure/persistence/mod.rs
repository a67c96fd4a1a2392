//! Link repository implementations.
//!
//! # Repositories
//!
//! - [`DynamoLinkRepository`] - DynamoDB table, used by the Lambda functions
//! - [`PgLinkRepository`] - PostgreSQL table via SQLx
//! - [`MemoryLinkRepository`] - In-process map for local runs and tests

pub mod dynamo_link_repository;
pub mod memory_link_repository;
pub mod pg_link_repository;

pub use dynamo_link_repository::DynamoLinkRepository;
pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;

pub use crate::domain::repositories::{StorageError, StorageResult};
