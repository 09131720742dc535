// Numeric extraction from heterogeneous records. Total: never panics, never yields NaN.

use crate::models::MetricRecord;

/// Reads `record[key]` as a number. Strings are parsed; absent keys and unparseable
/// strings read as `0`.
pub fn extract(record: &MetricRecord, key: &str) -> f64 {
    record.get(key).and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Like [`extract`] but distinguishes "absent or unparseable" from zero.
pub fn try_extract(record: &MetricRecord, key: &str) -> Option<f64> {
    record.get(key).and_then(|v| v.as_f64())
}

/// The record's headline number: `value`, else `cpu`, else `memory`, else `0`.
pub fn extract_primary(record: &MetricRecord) -> f64 {
    ["value", "cpu", "memory"]
        .iter()
        .find_map(|key| try_extract(record, key))
        .unwrap_or(0.0)
}
