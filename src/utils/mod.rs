//! Utility functions for identifier generation and URL validation.
//!
//! - [`id_generator`] - Random fixed-length short link identifiers
//! - [`link_validator`] - Long URL acceptance checks

pub mod id_generator;
pub mod link_validator;
