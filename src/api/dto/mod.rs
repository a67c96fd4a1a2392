//! Data Transfer Objects for API requests and responses.
//!
//! Link records are returned as [`crate::domain::entities::Link`] directly;
//! only request bodies and the health report have their own types.

pub mod health;
pub mod link;
