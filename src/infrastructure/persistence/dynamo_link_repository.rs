//! DynamoDB implementation of link repository.
//!
//! Each link is one item keyed by the `id` partition key:
//!
//! | attribute     | type | content                 |
//! |---------------|------|-------------------------|
//! | `id`          | S    | short link identifier   |
//! | `originalURL` | S    | long URL                |
//! | `createdAt`   | S    | RFC 3339 UTC timestamp  |

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue as Av, ReturnValue};
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashMap;
use tracing::debug;

use super::{StorageError, StorageResult};
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;

const ATTR_ID: &str = "id";
const ATTR_ORIGINAL_URL: &str = "originalURL";
const ATTR_CREATED_AT: &str = "createdAt";

/// DynamoDB repository for the link table.
///
/// The SDK client is cheap to clone and reuses its connection pool, so it is
/// built once per cold start.
#[derive(Clone)]
pub struct DynamoLinkRepository {
    client: Client,
    table_name: String,
}

impl DynamoLinkRepository {
    /// Creates a repository for `table_name` using an existing client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds a client from the ambient AWS configuration (environment,
    /// profile, or the Lambda execution role).
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_from_env().await;
        Self::new(Client::new(&config), table_name)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn backend_error<E: std::error::Error>(op: &str, e: E) -> StorageError {
    StorageError::Backend(format!("{}: {}", op, DisplayErrorContext(e)))
}

/// Converts a link into a DynamoDB item.
pub(crate) fn link_to_item(link: &Link) -> HashMap<String, Av> {
    HashMap::from([
        (ATTR_ID.to_string(), Av::S(link.id.clone())),
        (
            ATTR_ORIGINAL_URL.to_string(),
            Av::S(link.original_url.clone()),
        ),
        (
            ATTR_CREATED_AT.to_string(),
            Av::S(link.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        ),
    ])
}

fn string_attr<'a>(item: &'a HashMap<String, Av>, name: &str) -> Option<&'a String> {
    item.get(name).and_then(|v| v.as_s().ok())
}

/// Converts a DynamoDB item back into a link.
pub(crate) fn link_from_item(item: &HashMap<String, Av>) -> StorageResult<Link> {
    let id = string_attr(item, ATTR_ID).cloned().ok_or_else(|| StorageError::MalformedRecord {
        id: "<unknown>".to_string(),
        reason: format!("missing string attribute '{}'", ATTR_ID),
    })?;

    let malformed = |reason: String| StorageError::MalformedRecord {
        id: id.clone(),
        reason,
    };

    let original_url = string_attr(item, ATTR_ORIGINAL_URL)
        .cloned()
        .ok_or_else(|| malformed(format!("missing string attribute '{}'", ATTR_ORIGINAL_URL)))?;

    let created_at = string_attr(item, ATTR_CREATED_AT)
        .ok_or_else(|| malformed(format!("missing string attribute '{}'", ATTR_CREATED_AT)))?;
    let created_at = DateTime::parse_from_rfc3339(created_at)
        .map_err(|e| malformed(format!("invalid '{}': {}", ATTR_CREATED_AT, e)))?
        .with_timezone(&Utc);

    Ok(Link::new(id, original_url, created_at))
}

#[async_trait]
impl LinkRepository for DynamoLinkRepository {
    async fn put(&self, link: Link) -> StorageResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(link_to_item(&link)))
            .send()
            .await
            .map_err(|e| backend_error("PutItem", e))?;

        debug!(id = %link.id, table = %self.table_name, "Stored link");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Link>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Av::S(id.to_string()))
            .send()
            .await
            .map_err(|e| backend_error("GetItem", e))?;

        output.item.as_ref().map(link_from_item).transpose()
    }

    async fn delete(&self, id: &str) -> StorageResult<bool> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Av::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| backend_error("DeleteItem", e))?;

        Ok(output.attributes.is_some_and(|attrs| !attrs.is_empty()))
    }

    async fn health_check(&self) -> bool {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .is_ok()
    }
}
