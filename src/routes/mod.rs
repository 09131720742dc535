// HTTP routes: thin JSON wrappers over the engine.

mod http;
mod logs;
mod metrics;
mod window;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::window::MetricsWindow;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) window: Arc<Mutex<MetricsWindow>>,
    pub(crate) config: AppConfig,
}

pub fn app(config: AppConfig) -> Router {
    let state = AppState {
        window: Arc::new(Mutex::new(MetricsWindow::new(
            config.engine.window_capacity,
        ))),
        config,
    };
    Router::new()
        .route("/", get(|| async { "metrics-condenser" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/interval", get(http::interval_handler)) // GET /api/interval?start&end
        .route("/api/metrics/condense", post(metrics::condense_handler))
        .route("/api/metrics/minutes", post(metrics::minutes_handler))
        .route("/api/metrics/aggregate", post(metrics::aggregate_handler))
        .route("/api/metrics/snapshot", post(metrics::snapshot_handler))
        .route("/api/series/downsample", post(metrics::downsample_handler))
        .route("/api/logs/summary", post(logs::summary_handler))
        .route("/api/logs/condense", post(logs::condense_handler))
        .route("/api/window", post(window::push_handler))
        .route("/api/window/{key}", get(window::stats_handler))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
