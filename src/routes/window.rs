// Rolling window: push recent records, read per-key statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use tracing::instrument;

use super::AppState;
use crate::models::MetricRecord;
use crate::window::MetricsWindow;

#[derive(Debug, Serialize)]
pub(super) struct PushResponse {
    count: usize,
    capacity: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct WindowStats {
    key: String,
    count: usize,
    average: f64,
    min: f64,
    max: f64,
}

/// Takes the lock, recovering the guard if a previous holder panicked.
fn lock(window: &Mutex<MetricsWindow>) -> MutexGuard<'_, MetricsWindow> {
    window.lock().unwrap_or_else(|e| e.into_inner())
}

/// POST /api/window — append records in order; the last one becomes the newest.
#[instrument(skip_all, fields(records = records.len()))]
pub(super) async fn push_handler(
    State(state): State<AppState>,
    Json(records): Json<Vec<MetricRecord>>,
) -> Json<PushResponse> {
    let mut window = lock(&state.window);
    for record in records {
        window.push(record);
    }
    Json(PushResponse {
        count: window.len(),
        capacity: window.capacity(),
    })
}

/// GET /api/window/{key} — average/min/max of one field across the window.
#[instrument(skip(state))]
pub(super) async fn stats_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<WindowStats> {
    let window = lock(&state.window);
    Json(WindowStats {
        count: window.len(),
        average: window.average(&key),
        min: window.min(&key),
        max: window.max(&key),
        key,
    })
}
