use crate::cli::ServeArgs;
use crate::infra::{catalog_from_path, default_catalog, AppState, InMemoryStateStore};
use crate::routes::with_scheme_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use scheme_advisor::config::AppConfig;
use scheme_advisor::error::AppError;
use scheme_advisor::schemes::RecommendationService;
use scheme_advisor::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = match &config.catalog.path {
        Some(path) => catalog_from_path(path)?,
        None => default_catalog()?,
    };
    info!(schemes = catalog.len(), "scheme catalog loaded");

    let store = Arc::new(InMemoryStateStore::default());
    let service = Arc::new(RecommendationService::new(Arc::new(catalog), store));

    let app = with_scheme_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "scheme advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
