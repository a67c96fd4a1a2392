//! Caching layer in front of the link repository.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Managed Redis cache (ElastiCache in production)
//! - [`NullCache`] - No-op implementation when caching is disabled

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
