use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_personality_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mindshift::config::AppConfig;
use mindshift::error::AppError;
use mindshift::personality::PersonalityScorer;
use mindshift::telemetry;
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

    let scorer = Arc::new(PersonalityScorer::new(config.scoring.tie_break));

    let app = with_personality_routes(scorer)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        tie_break = %config.scoring.tie_break,
        "personality scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
