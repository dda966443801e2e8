//! Catalog service for the service directory.
//!
//! Orchestrates the full write path: trim input, validate, fill optional
//! fields, call the repository, and translate repository outcomes into
//! domain errors. Validation failures never reach storage.

use svcdir_types::error::{RepositoryError, ServiceError};
use svcdir_types::service::{Service, ServiceDraft, ServiceRequest};

use crate::repository::service::ServiceRepository;
use crate::validate;

/// Service orchestrating catalog reads and writes.
///
/// Generic over the repository trait -- svcdir-core never depends on
/// svcdir-infra, and tests can substitute an in-memory store.
pub struct CatalogService<R: ServiceRepository> {
    repo: R,
}

impl<R: ServiceRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List services newest-first by id, optionally restricted to a category.
    ///
    /// The filter is matched case-insensitively and exactly (not substring).
    /// A blank filter means no filter.
    pub async fn list(&self, category_filter: Option<&str>) -> Result<Vec<Service>, ServiceError> {
        let filter = category_filter.map(str::trim).filter(|c| !c.is_empty());
        self.repo.list(filter).await.map_err(storage_error)
    }

    /// Create a new service from untrusted input.
    ///
    /// Returns the stored record with its assigned id and creation timestamp.
    pub async fn create(&self, request: ServiceRequest) -> Result<Service, ServiceError> {
        let draft = build_draft(&request)?;
        tracing::debug!(title = %draft.title, category = %draft.category, "creating service");
        self.repo.insert(&draft).await.map_err(storage_error)
    }

    /// Replace the mutable fields of an existing service.
    ///
    /// `id` and `created_at` are preserved. Fails with `NotFound` before
    /// validating when no row exists for `id`.
    pub async fn update(&self, id: i64, request: ServiceRequest) -> Result<Service, ServiceError> {
        if self.repo.get(id).await.map_err(storage_error)?.is_none() {
            return Err(ServiceError::NotFound);
        }

        let draft = build_draft(&request)?;
        tracing::debug!(id, "updating service");
        self.repo.update(id, &draft).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => storage_error(other),
        })
    }

    /// Hard-delete a service. Success carries no payload; a second call for
    /// the same id fails with `NotFound`.
    pub async fn remove(&self, id: i64) -> Result<(), ServiceError> {
        tracing::debug!(id, "deleting service");
        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => storage_error(other),
        })
    }
}

/// Trim, validate, and default-fill a request into a storable draft.
///
/// Optional fields coerce to empty strings here, in one place, rather than
/// scattered across the endpoint layer.
fn build_draft(request: &ServiceRequest) -> Result<ServiceDraft, ServiceError> {
    let title = request.title.as_deref().unwrap_or("").trim();
    let category = request.category.as_deref().unwrap_or("").trim();
    validate::validate_required(title, category)?;

    let url = request.url.as_deref().unwrap_or("").trim();
    validate::validate_url(url)?;

    Ok(ServiceDraft {
        title: title.to_string(),
        category: category.to_string(),
        description: request
            .description
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_string(),
        url: url.to_string(),
    })
}

fn storage_error(e: RepositoryError) -> ServiceError {
    ServiceError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Inner {
        rows: Vec<Service>,
        next_id: i64,
    }

    /// In-memory stand-in for the SQLite repository.
    #[derive(Default)]
    struct MemoryRepository {
        inner: Mutex<Inner>,
    }

    impl ServiceRepository for MemoryRepository {
        async fn insert(&self, draft: &ServiceDraft) -> Result<Service, RepositoryError> {
            let mut inner = self.inner.lock().unwrap();
            inner.next_id += 1;
            let service = Service {
                id: inner.next_id,
                title: draft.title.clone(),
                category: draft.category.clone(),
                description: draft.description.clone(),
                url: draft.url.clone(),
                created_at: Utc::now(),
            };
            inner.rows.push(service.clone());
            Ok(service)
        }

        async fn get(&self, id: i64) -> Result<Option<Service>, RepositoryError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.rows.iter().find(|s| s.id == id).cloned())
        }

        async fn list(&self, category: Option<&str>) -> Result<Vec<Service>, RepositoryError> {
            let inner = self.inner.lock().unwrap();
            let mut rows: Vec<Service> = inner
                .rows
                .iter()
                .filter(|s| match category {
                    Some(c) => s.category.to_lowercase() == c.to_lowercase(),
                    None => true,
                })
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.id.cmp(&a.id));
            Ok(rows)
        }

        async fn update(&self, id: i64, draft: &ServiceDraft) -> Result<Service, RepositoryError> {
            let mut inner = self.inner.lock().unwrap();
            match inner.rows.iter_mut().find(|s| s.id == id) {
                Some(row) => {
                    row.title = draft.title.clone();
                    row.category = draft.category.clone();
                    row.description = draft.description.clone();
                    row.url = draft.url.clone();
                    Ok(row.clone())
                }
                None => Err(RepositoryError::NotFound),
            }
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            let mut inner = self.inner.lock().unwrap();
            let before = inner.rows.len();
            inner.rows.retain(|s| s.id != id);
            if inner.rows.len() == before {
                Err(RepositoryError::NotFound)
            } else {
                Ok(())
            }
        }
    }

    fn catalog() -> CatalogService<MemoryRepository> {
        CatalogService::new(MemoryRepository::default())
    }

    fn request(title: &str, category: &str) -> ServiceRequest {
        ServiceRequest {
            title: Some(title.to_string()),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_list_includes_record() {
        let catalog = catalog();
        let created = catalog
            .create(request("Writing Centre", "academic"))
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.description, "");
        assert_eq!(created.url, "");

        let listed = catalog.list(None).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Writing Centre");
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let catalog = catalog();
        let created = catalog
            .create(ServiceRequest {
                title: Some("  Academic Advising  ".to_string()),
                category: Some(" academic ".to_string()),
                description: Some("  Course planning  ".to_string()),
                url: Some(" https://example.com ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.title, "Academic Advising");
        assert_eq!(created.category, "academic");
        assert_eq!(created.description, "Course planning");
        assert_eq!(created.url, "https://example.com");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_title_without_storing() {
        let catalog = catalog();
        let err = catalog
            .create(ServiceRequest {
                category: Some("academic".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(catalog.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_url() {
        let catalog = catalog();
        let mut req = request("Writing Centre", "academic");
        req.url = Some("ftp://example.com".to_string());

        let err = catalog.create(req).await.unwrap_err();
        assert_eq!(err.to_string(), "url must be a valid http(s) link");
        assert!(catalog.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let catalog = catalog();
        catalog.create(request("First", "a")).await.unwrap();
        catalog.create(request("Second", "a")).await.unwrap();

        let listed = catalog.list(None).await.unwrap();
        assert_eq!(listed[0].title, "Second");
        assert_eq!(listed[1].title, "First");
    }

    #[tokio::test]
    async fn test_list_filter_is_case_insensitive_exact() {
        let catalog = catalog();
        catalog
            .create(request("Counselling Services", "wellness"))
            .await
            .unwrap();
        catalog
            .create(request("Writing Centre", "academic"))
            .await
            .unwrap();

        let upper = catalog.list(Some("WELLNESS")).await.unwrap();
        let lower = catalog.list(Some("wellness")).await.unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].title, "Counselling Services");

        // Substring is not a match.
        assert!(catalog.list(Some("well")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_blank_filter_means_all() {
        let catalog = catalog();
        catalog.create(request("One", "a")).await.unwrap();
        catalog.create(request("Two", "b")).await.unwrap();

        assert_eq!(catalog.list(Some("   ")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_preserving_id_and_created_at() {
        let catalog = catalog();
        let created = catalog.create(request("Old Title", "academic")).await.unwrap();

        let updated = catalog
            .update(
                created.id,
                ServiceRequest {
                    title: Some("New Title".to_string()),
                    category: Some("wellness".to_string()),
                    description: Some("Updated".to_string()),
                    url: Some("https://example.com".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.category, "wellness");
    }

    #[tokio::test]
    async fn test_update_nonexistent_returns_not_found() {
        let catalog = catalog();
        let err = catalog
            .update(999, request("Valid", "valid"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound));
        assert!(catalog.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_invalid_body_returns_validation() {
        let catalog = catalog();
        let created = catalog.create(request("Keep Me", "academic")).await.unwrap();

        let err = catalog
            .update(created.id, ServiceRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // Stored record untouched.
        let listed = catalog.list(None).await.unwrap();
        assert_eq!(listed[0].title, "Keep Me");
    }

    #[tokio::test]
    async fn test_remove_then_second_remove_not_found() {
        let catalog = catalog();
        let created = catalog.create(request("Ephemeral", "misc")).await.unwrap();

        catalog.remove(created.id).await.unwrap();
        assert!(catalog.list(None).await.unwrap().is_empty());

        let err = catalog.remove(created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[tokio::test]
    async fn test_duplicate_creates_are_allowed() {
        let catalog = catalog();
        catalog.create(request("Same", "cat")).await.unwrap();
        catalog.create(request("Same", "cat")).await.unwrap();

        let listed = catalog.list(None).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_ne!(listed[0].id, listed[1].id);
    }
}
