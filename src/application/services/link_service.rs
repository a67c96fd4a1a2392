//! Link creation, resolution, and deletion service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::id_generator::DEFAULT_ID_LENGTH;
use crate::utils::link_validator::validate_long_url;

/// Orchestrates link operations over the repository and cache collaborators.
///
/// The repository is the source of truth; the cache holds `id -> URL` for
/// redirects. Writes go to the repository first, then the cache. Nothing is
/// retried or compensated: a collaborator error is returned to the caller.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    id_length: usize,
    cache_ttl_seconds: Option<u64>,
}

impl LinkService {
    /// Creates a new link service with default id length and cache TTL.
    pub fn new(repository: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            repository,
            cache,
            id_length: DEFAULT_ID_LENGTH,
            cache_ttl_seconds: None,
        }
    }

    /// Sets the length of generated identifiers.
    pub fn with_id_length(mut self, id_length: usize) -> Self {
        self.id_length = id_length;
        self
    }

    /// Sets the TTL passed to the cache on every write.
    pub fn with_cache_ttl(mut self, ttl_seconds: u64) -> Self {
        self.cache_ttl_seconds = Some(ttl_seconds);
        self
    }

    pub fn id_length(&self) -> usize {
        self.id_length
    }

    /// Validates a long URL and builds a new, not yet stored, link for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the validator's reason if the
    /// URL is empty, too short, or malformed.
    pub fn build_link(&self, long_url: String) -> Result<Link, AppError> {
        validate_long_url(&long_url)?;
        Ok(Link::generate(long_url, self.id_length))
    }

    /// Stores a fully-formed link in the repository, then in the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if either write fails. A cache failure
    /// leaves the repository record in place; it is served from the
    /// repository on the next lookup.
    pub async fn create(&self, link: &Link) -> Result<(), AppError> {
        self.repository.put(link.clone()).await?;

        self.cache
            .set_url(&link.id, &link.original_url, self.cache_ttl_seconds)
            .await?;

        metrics::counter!("links_created_total").increment(1);
        debug!(id = %link.id, "Link created");
        Ok(())
    }

    /// Removes a link from the repository, then from the cache.
    ///
    /// Deleting an id that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if either collaborator fails.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let existed = self.repository.delete(id).await?;
        self.cache.invalidate(id).await?;

        if existed {
            metrics::counter!("links_deleted_total").increment(1);
        }
        debug!(id, existed, "Link deleted");
        Ok(())
    }

    /// Resolves a link id to its original URL.
    ///
    /// # Cache Strategy
    ///
    /// - **Cache hit**: returned directly
    /// - **Cache miss**: read the repository, then repopulate the cache
    /// - **Cache error**: logged, then treated as a miss
    ///
    /// Repopulation failures are logged and do not fail the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        match self.cache.get_url(id).await {
            Ok(Some(url)) => {
                metrics::counter!("cache_hits_total").increment(1);
                return Ok(url);
            }
            Ok(None) => {
                metrics::counter!("cache_misses_total").increment(1);
            }
            Err(e) => {
                warn!(error = %e, id, "Cache read failed, falling back to repository");
            }
        }

        let link = self.get(id).await?;

        if let Err(e) = self
            .cache
            .set_url(&link.id, &link.original_url, self.cache_ttl_seconds)
            .await
        {
            warn!(error = %e, id, "Failed to repopulate cache");
        }

        metrics::counter!("links_resolved_total").increment(1);
        Ok(link.original_url)
    }

    /// Retrieves the full link record from the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn get(&self, id: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Reports whether the repository backend is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Reports whether the cache backend is reachable.
    pub async fn cache_healthy(&self) -> bool {
        self.cache.health_check().await
    }
}
