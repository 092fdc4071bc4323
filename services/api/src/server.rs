use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use homewise::config::AppConfig;
use homewise::engine::{AdvisorService, PortfolioRepository};
use homewise::error::AppError;
use homewise::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::demo::{sample_bundle, DEMO_PORTFOLIO_ID};
use crate::infra::{AppState, InMemoryPortfolioRepository, TemplateReasoningProvider};
use crate::routes::api_router;

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

    let repository = InMemoryPortfolioRepository::default();
    repository
        .store(DEMO_PORTFOLIO_ID, sample_bundle(Local::now().date_naive()))
        .map_err(homewise::engine::AdvisorError::Repository)?;

    let advisor_service = Arc::new(AdvisorService::new(
        Arc::new(repository),
        Arc::new(TemplateReasoningProvider),
        config.engine.default_zone,
    ));

    let app = api_router(advisor_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "portfolio advisor service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
