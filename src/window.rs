// Rolling window of the most recent metric records (newest first).

use std::collections::VecDeque;

use crate::engine::{AggregationMethod, aggregate_values, extract};
use crate::models::MetricRecord;

pub const DEFAULT_WINDOW_CAPACITY: usize = 100;

/// Bounded newest-first buffer with per-key statistics.
/// Unlike the engine functions this holds state; wrap it in a lock to share it.
#[derive(Debug, Clone)]
pub struct MetricsWindow {
    records: VecDeque<MetricRecord>,
    capacity: usize,
}

impl MetricsWindow {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds `record` as the newest entry, evicting the oldest beyond capacity.
    pub fn push(&mut self, record: MetricRecord) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&MetricRecord> {
        self.records.front()
    }

    /// Mean of `key` over every held record; records without it count as `0`.
    pub fn average(&self, key: &str) -> f64 {
        self.stat(key, AggregationMethod::Average)
    }

    pub fn min(&self, key: &str) -> f64 {
        self.stat(key, AggregationMethod::Min)
    }

    pub fn max(&self, key: &str) -> f64 {
        self.stat(key, AggregationMethod::Max)
    }

    fn stat(&self, key: &str, method: AggregationMethod) -> f64 {
        let values: Vec<f64> = self.records.iter().map(|r| extract(r, key)).collect();
        aggregate_values(&values, method)
    }
}

impl Default for MetricsWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }
}
