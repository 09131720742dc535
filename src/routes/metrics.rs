// POST handlers over metric records and chart series.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::AppState;
use crate::engine::{self, AggregationMethod};
use crate::error::ApiError;
use crate::models::{
    MetricRecord, PerformanceSnapshot, ProcessedMetrics, SeriesPoint, SnapshotSamples,
};

/// POST /api/metrics/condense — one record from many.
#[instrument(skip_all, fields(records = records.len()))]
pub(super) async fn condense_handler(Json(records): Json<Vec<MetricRecord>>) -> Json<MetricRecord> {
    Json(engine::condense(&records))
}

/// POST /api/metrics/minutes — one condensed record per minute plus batch aggregates.
#[instrument(skip_all, fields(records = records.len()))]
pub(super) async fn minutes_handler(
    Json(records): Json<Vec<MetricRecord>>,
) -> Json<ProcessedMetrics> {
    Json(engine::process_metrics(&records))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AggregateRequest {
    records: Vec<MetricRecord>,
    #[serde(default)]
    method: AggregationMethod,
    /// Field to read; when omitted each record's headline number is used.
    key: Option<String>,
    /// Average only over records that carry `key` instead of counting absentees as 0.
    #[serde(default)]
    skip_missing: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct AggregateResponse {
    value: f64,
}

/// POST /api/metrics/aggregate — single statistic over one field.
#[instrument(skip_all, fields(records = req.records.len(), method = ?req.method, key = ?req.key))]
pub(super) async fn aggregate_handler(Json(req): Json<AggregateRequest>) -> Json<AggregateResponse> {
    let value = match (req.key.as_deref(), req.method) {
        (None, method) => engine::aggregate_primary(&req.records, method),
        (Some(key), AggregationMethod::Average) if req.skip_missing => {
            engine::calculate_average(&req.records, key)
        }
        (Some(key), method) => engine::aggregate(&req.records, method, key),
    };
    Json(AggregateResponse { value })
}

/// POST /api/metrics/snapshot — dashboard tile values from seven sample series.
#[instrument(skip_all)]
pub(super) async fn snapshot_handler(
    Json(samples): Json<SnapshotSamples>,
) -> Json<PerformanceSnapshot> {
    Json(engine::build_snapshot(&samples))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DownsampleRequest {
    points: Vec<SeriesPoint>,
    target_points: Option<usize>,
}

/// POST /api/series/downsample — chart-ready series of at most `targetPoints` points.
#[instrument(skip_all, fields(points = req.points.len(), target = ?req.target_points))]
pub(super) async fn downsample_handler(
    State(state): State<AppState>,
    Json(req): Json<DownsampleRequest>,
) -> Result<Json<Vec<SeriesPoint>>, ApiError> {
    let engine_config = &state.config.engine;
    let target = req
        .target_points
        .unwrap_or(engine_config.default_target_points);
    if !(2..=engine_config.max_target_points).contains(&target) {
        return Err(ApiError::InvalidTargetPoints {
            got: target,
            max: engine_config.max_target_points,
        });
    }
    Ok(Json(engine::downsample(&req.points, target)))
}
