use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryTenantRepository};
use crate::routes::with_tenant_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rental_hub::config::AppConfig;
use rental_hub::error::AppError;
use rental_hub::telemetry;
use rental_hub::tenants::directory::TenantDirectoryService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryTenantRepository::default());
    let directory = Arc::new(TenantDirectoryService::new(
        repository,
        config.directory.audit_actor.clone(),
    ));

    let app = with_tenant_routes(directory)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        audit_actor = %config.directory.audit_actor,
        "rental hub ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
