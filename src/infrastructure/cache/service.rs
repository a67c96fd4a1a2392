//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching `id -> original URL` mappings.
///
/// Implementations must be thread-safe. Errors are returned to the caller;
/// [`crate::application::services::LinkService`] decides which ones to
/// surface. Expiry is delegated to the backend through the TTL argument.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the original URL for a link id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get_url(&self, id: &str) -> CacheResult<Option<String>>;

    /// Stores a URL mapping with an optional TTL in seconds.
    ///
    /// `None` uses the implementation's default TTL.
    async fn set_url(&self, id: &str, original_url: &str, ttl_seconds: Option<u64>)
    -> CacheResult<()>;

    /// Removes a cached mapping. Removing a missing key is not an error.
    async fn invalidate(&self, id: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
