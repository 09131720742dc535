// GET handlers: version, interval recommendation

use axum::{Json, extract::Query, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::engine::recommend_interval;
use crate::error::ApiError;
use crate::models::{MetricsInterval, parse_timestamp};
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct IntervalQuery {
    start: String,
    end: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntervalResponse {
    interval: MetricsInterval,
    bucket_seconds: u64,
}

/// GET /api/interval?start=..&end=.. — sampling interval for a date range.
#[instrument(skip_all, fields(start = %query.start, end = %query.end))]
pub(super) async fn interval_handler(
    Query(query): Query<IntervalQuery>,
) -> Result<Json<IntervalResponse>, ApiError> {
    let start = parse_timestamp(&query.start).ok_or_else(|| ApiError::InvalidTimestamp {
        field: "start",
        value: query.start.clone(),
    })?;
    let end = parse_timestamp(&query.end).ok_or_else(|| ApiError::InvalidTimestamp {
        field: "end",
        value: query.end.clone(),
    })?;
    if end < start {
        return Err(ApiError::InvertedRange {
            start: query.start,
            end: query.end,
        });
    }

    let interval = recommend_interval(start, end);
    Ok(Json(IntervalResponse {
        interval,
        bucket_seconds: interval.duration().as_secs(),
    }))
}
