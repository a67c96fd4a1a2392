//! DTOs for link creation.

use serde::Deserialize;

/// Request body for `POST /links`.
///
/// ```json
/// { "long": "https://example.com/some/long/path" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// URL to shorten. Validated by the service, not at deserialization.
    pub long: String,
}
