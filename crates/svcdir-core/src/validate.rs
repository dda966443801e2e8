//! Pure validation rules for service input.
//!
//! No side effects and no network access: URL checking is purely syntactic.

use svcdir_types::error::ServiceError;
use url::Url;

/// Require `title` and `category` to be non-blank after trimming.
pub fn validate_required(title: &str, category: &str) -> Result<(), ServiceError> {
    if title.trim().is_empty() || category.trim().is_empty() {
        return Err(ServiceError::Validation(
            "title and category are required".to_string(),
        ));
    }
    Ok(())
}

/// Validate an optional URL field.
///
/// Empty input is valid (the URL is optional). Non-empty input must parse as
/// an absolute URL whose scheme is exactly `http` or `https`.
pub fn validate_url(url: &str) -> Result<(), ServiceError> {
    if url.is_empty() {
        return Ok(());
    }
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ServiceError::Validation(
            "url must be a valid http(s) link".to_string(),
        )),
    }
}

/// Parse a path identifier into a non-negative integer id.
///
/// Malformed identifiers fail before any lookup happens.
pub fn parse_id(raw: &str) -> Result<i64, ServiceError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => Err(ServiceError::InvalidId),
    }
}
