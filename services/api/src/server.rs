use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_directory_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use gtm_directory::config::AppConfig;
use gtm_directory::directory::{DirectoryService, InMemoryDirectory};
use gtm_directory::error::AppError;
use gtm_directory::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

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

    if config.directory.agencies_csv.is_none() {
        warn!("DIRECTORY_AGENCIES_CSV not set; agency pages will use fallback statistics");
    }
    let directory = InMemoryDirectory::load(
        config.directory.agencies_csv.as_ref(),
        config.directory.jobs_csv.as_ref(),
    )?;
    let service = Arc::new(DirectoryService::with_top_tags(
        Arc::new(directory),
        config.directory.top_tags,
    ));

    let app = with_directory_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "directory service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
