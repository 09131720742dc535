// Condensation: fold many raw records into one per minute (or per arbitrary window).
// Pure logic only; callers own fetching and storage.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::aggregate::mean_f64;
use super::extract::try_extract;
use crate::models::{
    BatchAggregates, MetricRecord, MetricValue, ProcessedMetrics, TimeRange, format_timestamp,
};

const MS_PER_MINUTE: i64 = 60_000;

/// Fields always present on a condensed record, defaulting to `0`.
const BASE_FIELDS: [&str; 2] = ["cpu", "memory"];

/// Condenses `records` into one representative record.
///
/// Each field is averaged over only the records that carry a numeric reading for it, so
/// `{cpu: 10}` and `{memory: 50}` condense to `{cpu: 10, memory: 50}`. Means are rounded to
/// one decimal. The timestamp is the latest parseable input timestamp, or now when none parse.
pub fn condense(records: &[MetricRecord]) -> MetricRecord {
    let refs: Vec<&MetricRecord> = records.iter().collect();
    condense_refs(&refs)
}

fn condense_refs(records: &[&MetricRecord]) -> MetricRecord {
    let latest = records.iter().filter_map(|r| r.instant()).max();
    let mut out = MetricRecord::new(format_timestamp(latest.unwrap_or_else(Utc::now)));
    for key in BASE_FIELDS {
        out.fields.insert(key.to_string(), MetricValue::Number(0.0));
    }

    let keys: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.fields.keys().map(String::as_str))
        .collect();

    for key in keys {
        let values: Vec<f64> = records.iter().filter_map(|r| try_extract(r, key)).collect();
        if values.is_empty() {
            continue;
        }
        out.fields.insert(
            key.to_string(),
            MetricValue::Number(round_one_decimal(mean_f64(&values))),
        );
    }
    out
}

/// Start of the minute containing `dt`.
pub fn minute_floor(dt: DateTime<Utc>) -> DateTime<Utc> {
    let ms = dt.timestamp_millis().div_euclid(MS_PER_MINUTE) * MS_PER_MINUTE;
    DateTime::from_timestamp_millis(ms).unwrap_or(dt)
}

/// Groups records into one-minute buckets and condenses each, ascending by bucket start.
/// Output timestamps are the bucket start. Records without a parseable timestamp are dropped.
pub fn bucket_by_minute(records: &[MetricRecord]) -> Vec<MetricRecord> {
    let mut by_minute: BTreeMap<DateTime<Utc>, Vec<&MetricRecord>> = BTreeMap::new();
    let mut dropped = 0usize;
    for r in records {
        match r.instant() {
            Some(ts) => by_minute.entry(minute_floor(ts)).or_default().push(r),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, "records without a parseable timestamp skipped");
    }

    by_minute
        .into_iter()
        .map(|(minute, members)| {
            let mut condensed = condense_refs(&members);
            condensed.timestamp = format_timestamp(minute);
            condensed
        })
        .collect()
}

/// Minute buckets plus the record count and covered time range of the batch.
pub fn process_metrics(records: &[MetricRecord]) -> ProcessedMetrics {
    let instants: Vec<DateTime<Utc>> = records.iter().filter_map(|r| r.instant()).collect();
    let time_range = match (instants.iter().min(), instants.iter().max()) {
        (Some(start), Some(end)) => Some(TimeRange {
            start: format_timestamp(*start),
            end: format_timestamp(*end),
        }),
        _ => None,
    };

    ProcessedMetrics {
        metrics: bucket_by_minute(records),
        aggregates: BatchAggregates {
            count: records.len(),
            time_range,
        },
    }
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
