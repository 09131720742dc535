// Chart series point.

use serde::{Deserialize, Serialize};

use super::parse_timestamp;

/// One `{timestamp, value}` point. A series is a `Vec<SeriesPoint>` in ascending time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            value,
        }
    }

    /// Epoch milliseconds of the timestamp, `None` if it does not parse.
    pub fn epoch_millis(&self) -> Option<i64> {
        parse_timestamp(&self.timestamp).map(|dt| dt.timestamp_millis())
    }
}
