//! Builds the service collaborators from configuration.
//!
//! Called once per cold start (or once at local server startup). The results
//! are shared by every request handled by the process.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::application::services::LinkService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{
    DynamoLinkRepository, MemoryLinkRepository, PgLinkRepository,
};

/// Builds the link repository selected by `STORAGE_BACKEND`.
///
/// For PostgreSQL, pending migrations are applied before the repository is
/// returned.
///
/// # Errors
///
/// Returns an error if required settings are missing, the database is
/// unreachable, or migrations fail.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.storage_backend {
        StorageBackend::DynamoDb => {
            let table = config
                .link_table_name
                .clone()
                .context("LINK_TABLE_NAME is not set")?;
            let repository = DynamoLinkRepository::from_env(table).await;
            tracing::info!(table = %repository.table_name(), "Using DynamoDB storage");
            Ok(Arc::new(repository))
        }
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is not set")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; links are lost on restart");
            Ok(Arc::new(MemoryLinkRepository::new()))
        }
    }
}

/// Builds the cache, falling back to [`NullCache`] when Redis is disabled
/// or unreachable.
pub async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

/// Builds a fully wired [`LinkService`].
///
/// # Errors
///
/// Propagates repository construction failures from [`build_repository`].
pub async fn build_link_service(config: &Config) -> Result<LinkService> {
    let repository = build_repository(config).await?;
    let cache = build_cache(config).await;

    Ok(LinkService::new(repository, cache)
        .with_id_length(config.id_length)
        .with_cache_ttl(config.cache_ttl_seconds))
}
