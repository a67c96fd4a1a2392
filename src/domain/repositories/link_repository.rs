//! Repository trait for short link data access.

use crate::domain::entities::Link;
use async_trait::async_trait;

/// Errors raised by a storage backend.
///
/// Backends convert their client errors into these variants, so callers
/// never see a backend-specific type.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("malformed record for id '{id}': {reason}")]
    MalformedRecord { id: String, reason: String },
}

/// Result type for repository operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Repository interface for the persistent link table, keyed by `id`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::DynamoLinkRepository`] - DynamoDB table
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL table
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a link, replacing any record with the same `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects the write.
    async fn put(&self, link: Link) -> StorageResult<()>;

    /// Finds a link by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Link>>;

    /// Removes a link.
    ///
    /// Returns `Ok(true)` if a record was removed and `Ok(false)` if none
    /// existed. Backends that cannot tell the difference report `true`.
    async fn delete(&self, id: &str) -> StorageResult<bool>;

    /// Checks if the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
