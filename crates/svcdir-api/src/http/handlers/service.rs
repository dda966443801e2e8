//! Service CRUD handlers for the REST API.
//!
//! Path ids arrive as raw strings and go through `parse_id` so malformed
//! identifiers produce the contract's 400 body rather than a framework
//! rejection.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use svcdir_core::validate;
use svcdir_types::service::{Service, ServiceRequest};

use crate::http::error::AppError;
use crate::http::extractors::query::ListServicesQuery;
use crate::state::AppState;

/// GET /api/services - List services newest-first, optionally filtered by
/// category.
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ListServicesQuery>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.catalog.list(query.category.as_deref()).await?;
    Ok(Json(services))
}

/// POST /api/services - Create a new service.
pub async fn create_service(
    State(state): State<AppState>,
    Json(body): Json<ServiceRequest>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    let created = state.catalog.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/services/{id} - Update an existing service.
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ServiceRequest>,
) -> Result<Json<Service>, AppError> {
    let id = validate::parse_id(&id)?;
    let updated = state.catalog.update(id, body).await?;
    Ok(Json(updated))
}

/// DELETE /api/services/{id} - Delete a service.
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = validate::parse_id(&id)?;
    state.catalog.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
