// Log activity: histograms, frequency rankings and a coarse volume trend.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Timelike, Utc};
use tracing::debug;

use crate::models::{
    LogActivitySummary, LogEvent, LogLevel, MessageCount, MetricRecord, MetricValue, SourceCount,
    Trend, TrendDirection, format_timestamp,
};

const TOP_MESSAGES: usize = 10;
const TOP_SOURCES: usize = 5;
/// Batches smaller than this always report a stable trend.
const TREND_MIN_EVENTS: usize = 10;
/// Percent change beyond which the trend is not stable.
const TREND_THRESHOLD_PERCENT: f64 = 5.0;

/// Summarizes a batch of log events, stamped with the current time.
pub fn summarize(events: &[LogEvent]) -> LogActivitySummary {
    summarize_at(events, Utc::now())
}

/// Summarizes a batch of log events, stamped with `at`.
pub fn summarize_at(events: &[LogEvent], at: DateTime<Utc>) -> LogActivitySummary {
    let by_level = level_histogram(events);
    let mut sources = FrequencyCounter::default();
    let mut messages = FrequencyCounter::default();
    let mut by_hour_of_day = [0u64; 24];
    let mut unparseable = 0usize;

    for event in events {
        if let Some(source) = event.source_name() {
            sources.add(source);
        }
        messages.add(&event.message);
        match event_hour(&event.timestamp) {
            Some(hour) => by_hour_of_day[hour] += 1,
            None => unparseable += 1,
        }
    }
    if unparseable > 0 {
        debug!(unparseable, "log events left out of the hour-of-day histogram");
    }

    let count = |level: LogLevel| by_level.get(&level).copied().unwrap_or(0);
    let total = events.len() as u64;
    LogActivitySummary {
        timestamp: format_timestamp(at),
        total_count: total,
        total_logs: total,
        error_count: count(LogLevel::Error) + count(LogLevel::Fatal),
        warning_count: count(LogLevel::Warn),
        top_messages: messages
            .ranked(TOP_MESSAGES)
            .into_iter()
            .map(|(message, count)| MessageCount { message, count })
            .collect(),
        top_sources: sources
            .ranked(TOP_SOURCES)
            .into_iter()
            .map(|(source, count)| SourceCount { source, count })
            .collect(),
        by_source: sources.into_map(),
        by_level,
        by_hour_of_day,
        recent_trend: batch_trend(events.len()),
    }
}

/// Classifies the change from `older` to `newer` event counts.
/// An `older` count of zero reads as no change.
pub fn classify_trend(older: usize, newer: usize) -> Trend {
    let percent_change = if older > 0 {
        (newer as f64 - older as f64) / older as f64 * 100.0
    } else {
        0.0
    };
    let direction = if percent_change > TREND_THRESHOLD_PERCENT {
        TrendDirection::Increasing
    } else if percent_change < -TREND_THRESHOLD_PERCENT {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };
    Trend {
        direction,
        percentage: percent_change.round().abs() as u64,
    }
}

/// Splits a batch at its midpoint in caller order and compares the halves.
/// An odd-sized batch puts the extra event in the newer half.
fn batch_trend(len: usize) -> Trend {
    if len < TREND_MIN_EVENTS {
        return Trend::STABLE;
    }
    let older = len / 2;
    classify_trend(older, len - older)
}

/// Folds a batch of log events into a metric record of per-level counts and the busiest
/// source, suitable for storing alongside system metrics.
pub fn condense_logs(events: &[LogEvent]) -> MetricRecord {
    condense_logs_at(events, Utc::now())
}

pub fn condense_logs_at(events: &[LogEvent], at: DateTime<Utc>) -> MetricRecord {
    let out = MetricRecord::new(format_timestamp(at))
        .with("cpu", 0.0)
        .with("memory", 0.0);
    if events.is_empty() {
        return out;
    }

    let by_level = level_histogram(events);
    let count = |level: LogLevel| by_level.get(&level).copied().unwrap_or(0) as f64;

    let mut sources = FrequencyCounter::default();
    for source in events.iter().filter_map(LogEvent::source_name) {
        sources.add(source);
    }
    let (top_source, top_source_count) = sources.leader().unwrap_or_default();

    out.with("totalLogs", events.len() as f64)
        .with("errorCount", count(LogLevel::Error) + count(LogLevel::Fatal))
        .with("warnCount", count(LogLevel::Warn))
        .with("infoCount", count(LogLevel::Info))
        .with("debugCount", count(LogLevel::Debug) + count(LogLevel::Trace))
        .with("topSource", MetricValue::Text(top_source))
        .with("topSourceCount", top_source_count as f64)
}

fn level_histogram(events: &[LogEvent]) -> BTreeMap<LogLevel, u64> {
    let mut by_level: BTreeMap<LogLevel, u64> = LogLevel::ALL.iter().map(|l| (*l, 0)).collect();
    for event in events {
        *by_level.entry(event.level).or_default() += 1;
    }
    by_level
}

/// Hour of day in the timestamp's own offset.
fn event_hour(timestamp: &str) -> Option<usize> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp.trim()) {
        return Some(dt.hour() as usize);
    }
    crate::models::parse_timestamp(timestamp).map(|dt| dt.hour() as usize)
}

/// Exact-match frequency counts that remember first-seen order for tie-breaking.
#[derive(Default)]
struct FrequencyCounter {
    order: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyCounter {
    fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.order[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.order.len());
                self.order.push((key.to_string(), 1));
            }
        }
    }

    /// Top `limit` entries by count, descending; equal counts keep first-seen order.
    fn ranked(&self, limit: usize) -> Vec<(String, u64)> {
        let mut entries = self.order.clone();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries
    }

    /// First key to reach the highest count.
    fn leader(&self) -> Option<(String, u64)> {
        self.order
            .iter()
            .fold(None, |best: Option<&(String, u64)>, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
            .cloned()
    }

    fn into_map(self) -> BTreeMap<String, u64> {
        self.order.into_iter().collect()
    }
}
