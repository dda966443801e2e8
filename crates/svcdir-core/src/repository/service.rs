//! Service repository trait definition.

use svcdir_types::error::RepositoryError;
use svcdir_types::service::{Service, ServiceDraft};

/// Repository trait for service persistence.
///
/// Implementations live in svcdir-infra (e.g., SqliteServiceRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait ServiceRepository: Send + Sync {
    /// Insert a new service with a fresh id and creation timestamp.
    /// Returns the stored record.
    fn insert(
        &self,
        draft: &ServiceDraft,
    ) -> impl std::future::Future<Output = Result<Service, RepositoryError>> + Send;

    /// Fetch a service by id.
    fn get(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Service>, RepositoryError>> + Send;

    /// List services newest-first by id, optionally restricted to a category
    /// (case-insensitive exact match).
    fn list(
        &self,
        category: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Vec<Service>, RepositoryError>> + Send;

    /// Overwrite the mutable fields of an existing service, preserving its id
    /// and creation timestamp. Returns the updated record.
    fn update(
        &self,
        id: i64,
        draft: &ServiceDraft,
    ) -> impl std::future::Future<Output = Result<Service, RepositoryError>> + Send;

    /// Permanently delete a service by id.
    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
