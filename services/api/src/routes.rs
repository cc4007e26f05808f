use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json};
use rental_hub::tenants::directory::{directory_router, TenantDirectoryService, TenantRepository};
use rental_hub::tenants::{
    from_api_list, from_api_value, to_api_value, ApiTenantPayload, UiTenantRecord,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub(crate) fn with_tenant_routes<R>(directory: Arc<TenantDirectoryService<R>>) -> axum::Router
where
    R: TenantRepository + 'static,
{
    directory_router(directory)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/normalize/tenant", post(normalize_endpoint))
        .route("/api/v1/hydrate/tenant", post(hydrate_endpoint))
        .route("/api/v1/hydrate/tenants", post(hydrate_list_endpoint))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Form record in, API payload out. Any JSON is accepted.
pub(crate) async fn normalize_endpoint(Json(record): Json<Value>) -> Json<ApiTenantPayload> {
    Json(to_api_value(&record))
}

pub(crate) async fn hydrate_endpoint(Json(record): Json<Value>) -> Json<UiTenantRecord> {
    Json(from_api_value(&record))
}

pub(crate) async fn hydrate_list_endpoint(Json(records): Json<Value>) -> Json<Vec<UiTenantRecord>> {
    Json(from_api_list(&records))
}
