// Log activity report models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Coarse volume trend; `percentage` is the absolute, rounded percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub percentage: u64,
}

impl Trend {
    pub const STABLE: Trend = Trend {
        direction: TrendDirection::Stable,
        percentage: 0,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCount {
    pub message: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    pub count: u64,
}

/// Read-only report built once per batch of log events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogActivitySummary {
    pub timestamp: String,
    pub total_count: u64,
    /// Same as `total_count`; dashboards read either name.
    pub total_logs: u64,
    /// Every level is present, zero-filled.
    pub by_level: BTreeMap<LogLevel, u64>,
    /// Only sources that were observed.
    pub by_source: BTreeMap<String, u64>,
    pub error_count: u64,
    pub warning_count: u64,
    pub top_messages: Vec<MessageCount>,
    pub top_sources: Vec<SourceCount>,
    /// Index is the hour of day, 0..=23.
    pub by_hour_of_day: [u64; 24],
    pub recent_trend: Trend,
}
