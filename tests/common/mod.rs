// Shared test helpers
#![allow(dead_code)]

use metrics_condenser::models::*;

pub const BASE: &str = "2024-03-01T12:00:00Z";

/// ISO timestamp `secs` seconds after BASE.
pub fn ts(secs: i64) -> String {
    let base = parse_timestamp(BASE).unwrap();
    format_timestamp(base + chrono::TimeDelta::seconds(secs))
}

pub fn record(timestamp: &str, fields: &[(&str, f64)]) -> MetricRecord {
    fields
        .iter()
        .fold(MetricRecord::new(timestamp), |r, (k, v)| r.with(*k, *v))
}

pub fn value(v: f64) -> MetricRecord {
    MetricRecord::new(BASE).with("value", v)
}

pub fn values(vs: &[f64]) -> Vec<MetricRecord> {
    vs.iter().map(|v| value(*v)).collect()
}

pub fn point(secs: i64, value: f64) -> SeriesPoint {
    SeriesPoint::new(ts(secs), value)
}

pub fn event(level: LogLevel, message: &str) -> LogEvent {
    LogEvent::new(BASE, level, message)
}
