use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::repository::{RepositoryError, TenantRepository};
use super::service::{DirectoryError, TenantDirectoryService};
use crate::tenants::ui::UiTenantRecord;

/// Router builder exposing the tenant directory over HTTP.
pub fn directory_router<R>(service: Arc<TenantDirectoryService<R>>) -> Router
where
    R: TenantRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/tenants",
            get(list_handler::<R>).post(register_handler::<R>),
        )
        .route(
            "/api/v1/tenants/:tenant_id",
            get(get_handler::<R>).put(update_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<TenantDirectoryService<R>>>,
    Json(form): Json<UiTenantRecord>,
) -> Response
where
    R: TenantRepository + 'static,
{
    match service.register(form) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<TenantDirectoryService<R>>>) -> Response
where
    R: TenantRepository + 'static,
{
    match service.list() {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<TenantDirectoryService<R>>>,
    Path(tenant_id): Path<String>,
) -> Response
where
    R: TenantRepository + 'static,
{
    match service.get(&tenant_id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<TenantDirectoryService<R>>>,
    Path(tenant_id): Path<String>,
    Json(form): Json<UiTenantRecord>,
) -> Response
where
    R: TenantRepository + 'static,
{
    match service.update(&tenant_id, form) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) fn error_response(error: DirectoryError) -> Response {
    let status = match &error {
        DirectoryError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DirectoryError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        DirectoryError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        DirectoryError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
