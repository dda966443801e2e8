use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listed campus/support service.
///
/// One flat record: created once, updated any number of times, hard-deleted.
/// `id` and `created_at` are assigned at creation and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Assigned by the database on insert, immutable thereafter.
    pub id: i64,
    pub title: String,
    /// Compared case-insensitively when filtering listings.
    pub category: String,
    /// Empty string when the submitter left it out.
    pub description: String,
    /// Empty string, or a well-formed http(s) URL at the time it was written.
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or updating a service.
///
/// All fields are optional at the wire level so that a missing `title` or
/// `category` surfaces as a validation error rather than a deserialization
/// failure. The catalog service trims and validates before anything is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Validated, trimmed, default-filled field set ready for storage.
///
/// Produced by the catalog service from a [`ServiceRequest`]; the repository
/// layer never sees unvalidated input.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub url: String,
}
