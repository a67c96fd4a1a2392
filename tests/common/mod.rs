#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use snipline::api::routes::{create_routes, delete_routes, health_routes, redirect_routes};
use snipline::application::services::LinkService;
use snipline::domain::entities::Link;
use snipline::domain::repositories::{LinkRepository, StorageError, StorageResult};
use snipline::infrastructure::cache::{CacheError, CacheResult, CacheService};
use snipline::infrastructure::persistence::MemoryLinkRepository;
use snipline::routes::function_router;
use snipline::state::AppState;
use axum::Router;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-memory cache that records what the service wrote, with a switch to
/// make every operation fail.
#[derive(Default)]
pub struct RecordingCache {
    entries: RwLock<HashMap<String, (String, Option<u64>)>>,
    failing: AtomicBool,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn url(&self, id: &str) -> Option<String> {
        self.entries.read().await.get(id).map(|(url, _)| url.clone())
    }

    pub async fn ttl(&self, id: &str) -> Option<u64> {
        self.entries.read().await.get(id).and_then(|(_, ttl)| *ttl)
    }

    pub async fn insert(&self, id: &str, url: &str) {
        self.entries
            .write()
            .await
            .insert(id.to_string(), (url.to_string(), None));
    }

    fn check(&self) -> CacheResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(CacheError::OperationError("cache unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CacheService for RecordingCache {
    async fn get_url(&self, id: &str) -> CacheResult<Option<String>> {
        self.check()?;
        Ok(self.url(id).await)
    }

    async fn set_url(
        &self,
        id: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.check()?;
        self.entries
            .write()
            .await
            .insert(id.to_string(), (original_url.to_string(), ttl_seconds));
        Ok(())
    }

    async fn invalidate(&self, id: &str) -> CacheResult<()> {
        self.check()?;
        self.entries.write().await.remove(id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.failing.load(Ordering::SeqCst)
    }
}

/// Repository whose every operation fails.
pub struct FailingRepository;

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn put(&self, _link: Link) -> StorageResult<()> {
        Err(StorageError::Backend("table unavailable".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> StorageResult<Option<Link>> {
        Err(StorageError::Backend("table unavailable".to_string()))
    }

    async fn delete(&self, _id: &str) -> StorageResult<bool> {
        Err(StorageError::Backend("table unavailable".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub struct TestContext {
    pub repository: Arc<MemoryLinkRepository>,
    pub cache: Arc<RecordingCache>,
    pub state: AppState,
}

pub const TEST_CACHE_TTL: u64 = 600;

pub fn create_test_context() -> TestContext {
    let repository = Arc::new(MemoryLinkRepository::new());
    let cache = Arc::new(RecordingCache::new());

    let service = LinkService::new(repository.clone(), cache.clone()).with_cache_ttl(TEST_CACHE_TTL);

    TestContext {
        repository,
        cache,
        state: AppState::new(service),
    }
}

pub fn create_failing_state() -> AppState {
    let service = LinkService::new(Arc::new(FailingRepository), Arc::new(RecordingCache::new()));
    AppState::new(service)
}

/// All routes, assembled the way the Lambda functions assemble theirs.
pub fn test_router(state: AppState) -> Router {
    let routes = create_routes()
        .merge(delete_routes())
        .merge(health_routes())
        .merge(redirect_routes());

    function_router(routes, state)
}

pub async fn create_test_link(repository: &MemoryLinkRepository, id: &str, url: &str) {
    repository
        .put(Link::new(id.to_string(), url.to_string(), Utc::now()))
        .await
        .unwrap();
}
