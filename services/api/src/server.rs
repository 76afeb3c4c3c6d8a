use crate::cli::ServeArgs;
use crate::infra::{seeded_dataset, AppState};
use crate::routes::router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Datelike, Local};
use learnlytics::config::AppConfig;
use learnlytics::error::AppError;
use learnlytics::telemetry;
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
    if let Some(seed) = args.seed.take() {
        config.dataset_seed = seed;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

    let fiscal_year = config
        .fiscal_year
        .unwrap_or_else(|| Local::now().date_naive().year());
    let dataset = seeded_dataset(fiscal_year, config.dataset_seed);
    info!(
        seed = config.dataset_seed,
        records = dataset.len(),
        fiscal_year,
        "synthetic dataset generated"
    );

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dataset: Arc::new(dataset),
    };

    let app = router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "learning analytics dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
