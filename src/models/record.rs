// Metric records: a timestamp plus an open set of numeric or numeric-string fields.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One field value. JSON numbers map to `Number`, JSON strings to `Text`; anything else
/// (booleans, nulls, nested values) is carried through as `Other` and reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl MetricValue {
    /// Numeric reading of the value; `None` when a string does not parse to a finite float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) if n.is_finite() => Some(*n),
            MetricValue::Number(_) => None,
            MetricValue::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            MetricValue::Other(_) => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Number(v)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        MetricValue::Text(s)
    }
}

/// A timestamped bag of named fields. Serializes flat: `{"timestamp": "...", "cpu": 12.5}`.
///
/// On input a string `time` stands in for a missing `timestamp`. When both are present
/// `timestamp` wins and `time` stays an ordinary field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct MetricRecord {
    pub timestamp: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, MetricValue>,
}

#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(flatten)]
    fields: BTreeMap<String, MetricValue>,
}

impl From<RawRecord> for MetricRecord {
    fn from(raw: RawRecord) -> Self {
        let RawRecord {
            timestamp,
            mut fields,
        } = raw;
        let timestamp = match timestamp {
            Some(ts) => ts,
            None => match fields.remove("time") {
                Some(MetricValue::Text(ts)) => ts,
                Some(other) => {
                    fields.insert("time".to_string(), other);
                    String::new()
                }
                None => String::new(),
            },
        };
        Self { timestamp, fields }
    }
}

impl MetricRecord {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Parsed timestamp, or `None` when missing or malformed.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parses an ISO-8601 timestamp. RFC 3339 is tried first; offset-less date-times and
/// bare dates are read as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Canonical wire form: UTC with millisecond precision, e.g. `2024-03-01T12:00:00.000Z`.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
