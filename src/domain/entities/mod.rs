//! Core domain entities.
//!
//! - [`Link`] - A stored mapping from a short identifier to a long URL

pub mod link;

pub use link::Link;
