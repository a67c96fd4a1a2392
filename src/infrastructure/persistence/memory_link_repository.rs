//! In-memory link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::StorageResult;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;

/// Link repository backed by a `HashMap` behind an async `RwLock`.
///
/// Contents live only as long as the process. Selected with
/// `STORAGE_BACKEND=memory`.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn put(&self, link: Link) -> StorageResult<()> {
        self.links.write().await.insert(link.id.clone(), link);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Link>> {
        Ok(self.links.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> StorageResult<bool> {
        Ok(self.links.write().await.remove(id).is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn link(id: &str, url: &str) -> Link {
        Link::new(id.to_string(), url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn put_and_find() {
        let repo = MemoryLinkRepository::new();

        repo.put(link("testid1", "https://example.com/link1"))
            .await
            .unwrap();

        let found = repo.find_by_id("testid1").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com/link1");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_replaces_same_id() {
        let repo = MemoryLinkRepository::new();

        repo.put(link("testid1", "https://example.com/link1"))
            .await
            .unwrap();
        repo.put(link("testid1", "https://example.com/link2"))
            .await
            .unwrap();

        let found = repo.find_by_id("testid1").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com/link2");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let repo = MemoryLinkRepository::new();
        repo.put(link("testid2", "https://example.com/link2"))
            .await
            .unwrap();

        assert!(repo.delete("testid2").await.unwrap());
        assert!(!repo.delete("testid2").await.unwrap());
        assert!(repo.is_empty().await);
    }
}
