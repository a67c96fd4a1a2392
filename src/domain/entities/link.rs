//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::id_generator::generate_id;

/// A stored mapping from a short identifier to its original URL.
///
/// `id` is assigned once at creation and never changes. There is no update
/// operation, so `original_url` is immutable too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    #[serde(rename = "originalURL")]
    pub original_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a Link from already-known parts.
    pub fn new(id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            created_at,
        }
    }

    /// Creates a new Link with a freshly generated identifier, stamped now.
    ///
    /// The URL is expected to have passed
    /// [`validate_long_url`](crate::utils::link_validator::validate_long_url).
    pub fn generate(original_url: String, id_length: usize) -> Self {
        Self::new(generate_id(id_length), original_url, Utc::now())
    }
}
