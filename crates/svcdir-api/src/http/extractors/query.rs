//! Query parameter extractors for list endpoints.

use serde::Deserialize;

/// Query parameters for the service list endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct ListServicesQuery {
    /// Case-insensitive exact category filter.
    pub category: Option<String>,
}
