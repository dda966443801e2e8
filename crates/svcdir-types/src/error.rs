use thiserror::Error;

/// Errors from catalog operations, mapped to HTTP responses at the API edge.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Bad or missing input fields. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    /// Malformed path identifier, rejected before any lookup.
    #[error("Invalid id")]
    InvalidId,

    /// No row exists for the given id.
    #[error("Not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by the trait definition in
/// svcdir-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}
