//! Demo seed data for the catalog.
//!
//! Clears the table and inserts a small set of campus services so the
//! browser view has something to show on a fresh install.

use svcdir_core::repository::service::ServiceRepository;
use svcdir_types::error::RepositoryError;
use svcdir_types::service::ServiceDraft;

use super::pool::DatabasePool;
use super::service::SqliteServiceRepository;

const SEED_ROWS: &[(&str, &str, &str, &str)] = &[
    (
        "Academic Advising",
        "academic",
        "Course planning and program support",
        "https://www.georgebrown.ca/ask-george-brown/do-you-have-advising-services-1660689791502",
    ),
    (
        "Writing Centre",
        "academic",
        "Help with writing and assignments",
        "https://www.georgebrown.ca/tutoring-and-learning-centre",
    ),
    (
        "Scholarships & Bursaries",
        "financial",
        "Support for financial aid options",
        "https://www.georgebrown.ca/apply/financial-aid",
    ),
    (
        "Counselling Services",
        "wellness",
        "Mental health support and counselling",
        "https://www.georgebrown.ca/current-students/services/counselling",
    ),
];

/// Replace the table contents with the demo rows. Returns the row count.
pub async fn seed_services(pool: &DatabasePool) -> Result<usize, RepositoryError> {
    sqlx::query("DELETE FROM services")
        .execute(&pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    let repo = SqliteServiceRepository::new(pool.clone());
    for (title, category, description, url) in SEED_ROWS {
        repo.insert(&ServiceDraft {
            title: (*title).to_string(),
            category: (*category).to_string(),
            description: (*description).to_string(),
            url: (*url).to_string(),
        })
        .await?;
    }

    tracing::info!(count = SEED_ROWS.len(), "seeded services table");
    Ok(SEED_ROWS.len())
}
