// Point-in-time dashboard snapshot built from independent sample series.

use serde::{Deserialize, Serialize};

use super::MetricRecord;

/// Fixed-shape performance tile data. Built fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub timestamp: String,
    pub cpu: f64,
    pub memory: f64,
    pub active_connections: f64,
    pub requests_per_minute: f64,
    pub errors_per_minute: f64,
    pub average_response_time: f64,
    pub active_users: f64,
}

/// The seven input series a snapshot is derived from. Missing series read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotSamples {
    pub cpu: Vec<MetricRecord>,
    pub memory: Vec<MetricRecord>,
    pub connections: Vec<MetricRecord>,
    pub requests: Vec<MetricRecord>,
    pub errors: Vec<MetricRecord>,
    pub response_times: Vec<MetricRecord>,
    pub users: Vec<MetricRecord>,
}
