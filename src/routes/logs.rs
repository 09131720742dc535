// POST handlers over log event batches.

use axum::Json;
use tracing::instrument;

use crate::engine;
use crate::models::{LogActivitySummary, LogEvent, MetricRecord};

/// POST /api/logs/summary — histograms, top messages/sources and trend.
#[instrument(skip_all, fields(events = events.len()))]
pub(super) async fn summary_handler(Json(events): Json<Vec<LogEvent>>) -> Json<LogActivitySummary> {
    Json(engine::summarize(&events))
}

/// POST /api/logs/condense — per-level counts folded into a metric record.
#[instrument(skip_all, fields(events = events.len()))]
pub(super) async fn condense_handler(Json(events): Json<Vec<LogEvent>>) -> Json<MetricRecord> {
    Json(engine::condense_logs(&events))
}
