//! Application state wiring the catalog service to its SQLite backing.
//!
//! The catalog service is generic over the repository trait; AppState pins
//! it to the concrete infra implementation.

use std::sync::Arc;

use svcdir_core::service::catalog::CatalogService;
use svcdir_infra::sqlite::pool::{DatabasePool, default_database_url};
use svcdir_infra::sqlite::service::SqliteServiceRepository;

/// Concrete type alias for the catalog generics pinned to the infra
/// implementation.
pub type ConcreteCatalogService = CatalogService<SqliteServiceRepository>;

/// Shared application state used by both CLI commands and REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ConcreteCatalogService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state against the configured database.
    pub async fn init() -> anyhow::Result<Self> {
        Self::with_database_url(&default_database_url()).await
    }

    /// Initialize against a specific database URL.
    pub async fn with_database_url(database_url: &str) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(database_url).await?;
        let catalog = CatalogService::new(SqliteServiceRepository::new(db_pool.clone()));

        Ok(Self {
            catalog: Arc::new(catalog),
            db_pool,
        })
    }
}
