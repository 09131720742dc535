// Minute-condensed view of a raw record batch.

use serde::{Deserialize, Serialize};

use super::MetricRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAggregates {
    /// Number of input records, including ones that could not be bucketed.
    pub count: usize,
    /// Span of the parseable timestamps; absent when none parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

/// One condensed record per minute plus batch-level aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedMetrics {
    pub metrics: Vec<MetricRecord>,
    pub aggregates: BatchAggregates,
}
