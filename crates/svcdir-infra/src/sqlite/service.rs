//! SQLite service repository implementation.
//!
//! Implements `ServiceRepository` from `svcdir-core` using sqlx with split
//! read/write pools. Timestamps are stored as RFC 3339 text; rows written
//! through the column default keep sqlite's `datetime('now')` format, and
//! both are accepted when reading.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::Row;
use svcdir_core::repository::service::ServiceRepository;
use svcdir_types::error::RepositoryError;
use svcdir_types::service::{Service, ServiceDraft};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ServiceRepository`.
pub struct SqliteServiceRepository {
    pool: DatabasePool,
}

impl SqliteServiceRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Service.
struct ServiceRow {
    id: i64,
    title: String,
    category: String,
    description: String,
    url: String,
    created_at: String,
}

impl ServiceRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            category: row.try_get("category")?,
            description: row.try_get("description")?,
            url: row.try_get("url")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_service(self) -> Result<Service, RepositoryError> {
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Service {
            id: self.id,
            title: self.title,
            category: self.category,
            description: self.description,
            url: self.url,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl ServiceRepository for SqliteServiceRepository {
    async fn insert(&self, draft: &ServiceDraft) -> Result<Service, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO services (title, category, description, url, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&draft.title)
        .bind(&draft.category)
        .bind(&draft.description)
        .bind(&draft.url)
        .bind(format_datetime(&created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get(id)
            .await?
            .ok_or_else(|| RepositoryError::Query(format!("inserted row {id} not found")))
    }

    async fn get(&self, id: i64) -> Result<Option<Service>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM services WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let service_row = ServiceRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(service_row.into_service()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Service>, RepositoryError> {
        let rows = match category {
            Some(cat) => {
                sqlx::query(
                    "SELECT * FROM services WHERE LOWER(category) = LOWER(?) ORDER BY id DESC",
                )
                .bind(cat)
                .fetch_all(&self.pool.reader)
                .await
            }
            None => {
                sqlx::query("SELECT * FROM services ORDER BY id DESC")
                    .fetch_all(&self.pool.reader)
                    .await
            }
        }
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut services = Vec::with_capacity(rows.len());
        for row in &rows {
            let service_row =
                ServiceRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            services.push(service_row.into_service()?);
        }

        Ok(services)
    }

    async fn update(&self, id: i64, draft: &ServiceDraft) -> Result<Service, RepositoryError> {
        let result = sqlx::query(
            "UPDATE services SET title = ?, category = ?, description = ?, url = ?
             WHERE id = ?",
        )
        .bind(&draft.title)
        .bind(&draft.category)
        .bind(&draft.description)
        .bind(&draft.url)
        .bind(id)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        self.get(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
