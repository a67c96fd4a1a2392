//! Validation of incoming long URLs.

use url::Url;

/// Minimum accepted URL length, in characters.
pub const MIN_URL_LENGTH: usize = 15;

/// Reasons a long URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("URL must be at least {min} characters long")]
    TooShort { length: usize, min: usize },

    #[error("Invalid URL format")]
    InvalidFormat,
}

/// Checks a candidate long URL.
///
/// Checks run in order and stop at the first failure:
///
/// 1. the string is non-empty
/// 2. it is at least [`MIN_URL_LENGTH`] characters long
/// 3. it parses as an absolute `http`/`https` URL with a host
///
/// # Examples
///
/// ```
/// use snipline::utils::link_validator::{validate_long_url, LinkValidationError};
///
/// assert!(validate_long_url("https://example.com/page").is_ok());
/// assert_eq!(validate_long_url(""), Err(LinkValidationError::Empty));
/// ```
pub fn validate_long_url(input: &str) -> Result<(), LinkValidationError> {
    if input.is_empty() {
        return Err(LinkValidationError::Empty);
    }

    let length = input.chars().count();
    if length < MIN_URL_LENGTH {
        return Err(LinkValidationError::TooShort {
            length,
            min: MIN_URL_LENGTH,
        });
    }

    if !is_valid_link(input) {
        return Err(LinkValidationError::InvalidFormat);
    }

    Ok(())
}

/// Structural URL check: absolute, `http` or `https`, with a host.
fn is_valid_link(input: &str) -> bool {
    let Ok(parsed) = Url::parse(input) else {
        return false;
    };

    matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some_and(|h| !h.is_empty())
}
