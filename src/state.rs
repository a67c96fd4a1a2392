//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state cloned into each request.
///
/// Built once per process; the service holds the storage and cache clients.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: LinkService) -> Self {
        Self {
            link_service: Arc::new(link_service),
        }
    }
}
