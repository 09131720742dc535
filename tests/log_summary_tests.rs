// Log activity tests: level/source histograms, rankings, hour-of-day, trend

mod common;

use common::*;
use metrics_condenser::engine::*;
use metrics_condenser::models::*;

fn at() -> chrono::DateTime<chrono::Utc> {
    parse_timestamp("2024-03-02T00:00:00Z").unwrap()
}

fn text(r: &MetricRecord, key: &str) -> Option<String> {
    match r.get(key) {
        Some(MetricValue::Text(s)) => Some(s.clone()),
        _ => None,
    }
}

#[test]
fn summarize_empty_batch() {
    let s = summarize_at(&[], at());
    assert_eq!(s.total_count, 0);
    assert_eq!(s.total_logs, 0);
    assert_eq!(s.by_level.len(), 6);
    assert!(s.by_level.values().all(|c| *c == 0));
    assert!(s.by_source.is_empty());
    assert!(s.top_messages.is_empty());
    assert!(s.top_sources.is_empty());
    assert_eq!(s.by_hour_of_day, [0; 24]);
    assert_eq!(s.recent_trend, Trend::STABLE);
    assert_eq!(s.timestamp, "2024-03-02T00:00:00.000Z");
}

#[test]
fn summarize_combines_error_and_fatal() {
    let events = vec![
        event(LogLevel::Error, "e"),
        event(LogLevel::Fatal, "f"),
        event(LogLevel::Warn, "w"),
        event(LogLevel::Info, "i"),
        event(LogLevel::Trace, "t"),
    ];
    let s = summarize_at(&events, at());
    assert_eq!(s.total_count, 5);
    assert_eq!(s.total_logs, 5);
    assert_eq!(s.error_count, 2);
    assert_eq!(s.warning_count, 1);
    assert_eq!(s.by_level[&LogLevel::Error], 1);
    assert_eq!(s.by_level[&LogLevel::Debug], 0);
    assert_eq!(s.by_level[&LogLevel::Trace], 1);
}

#[test]
fn summarize_counts_only_named_sources() {
    let events = vec![
        event(LogLevel::Info, "a").with_source("api"),
        event(LogLevel::Info, "b").with_source("api"),
        event(LogLevel::Info, "c").with_source(""),
        event(LogLevel::Info, "d"),
        event(LogLevel::Info, "e").with_source("db"),
    ];
    let s = summarize_at(&events, at());
    assert_eq!(s.by_source.len(), 2);
    assert_eq!(s.by_source["api"], 2);
    assert_eq!(s.by_source["db"], 1);
}

#[test]
fn top_messages_sorted_by_count_with_first_seen_tie_break() {
    let mut events = Vec::new();
    for message in ["a", "b", "c", "b", "a", "b", "c"] {
        events.push(event(LogLevel::Info, message));
    }
    let s = summarize_at(&events, at());
    let ranked: Vec<(&str, u64)> = s
        .top_messages
        .iter()
        .map(|m| (m.message.as_str(), m.count))
        .collect();
    assert_eq!(ranked, vec![("b", 3), ("a", 2), ("c", 2)]);
}

#[test]
fn top_lists_are_truncated() {
    let events: Vec<LogEvent> = (0..12)
        .map(|i| event(LogLevel::Info, &format!("message {i}")).with_source(format!("svc{i}")))
        .collect();
    let s = summarize_at(&events, at());
    assert_eq!(s.top_messages.len(), 10);
    assert_eq!(s.top_messages[0].message, "message 0");
    assert_eq!(s.top_sources.len(), 5);
    assert_eq!(s.top_sources[4].source, "svc4");
    assert_eq!(s.by_source.len(), 12);
}

#[test]
fn hour_histogram_uses_timestamp_offset_and_skips_bad_timestamps() {
    let events = vec![
        LogEvent::new("2024-03-01T13:15:00Z", LogLevel::Info, "x"),
        LogEvent::new("2024-03-01T13:59:59+02:00", LogLevel::Info, "x"),
        LogEvent::new("2024-03-01T00:00:00Z", LogLevel::Info, "x"),
        LogEvent::new("not a time", LogLevel::Error, "x"),
    ];
    let s = summarize_at(&events, at());
    assert_eq!(s.by_hour_of_day[13], 2);
    assert_eq!(s.by_hour_of_day[0], 1);
    assert_eq!(s.by_hour_of_day.iter().sum::<u64>(), 3);
    assert_eq!(s.total_count, 4);
    assert_eq!(s.error_count, 1);
}

#[test]
fn trend_is_stable_for_even_or_small_batches() {
    let twenty: Vec<LogEvent> = (0..20).map(|_| event(LogLevel::Info, "x")).collect();
    assert_eq!(summarize_at(&twenty, at()).recent_trend, Trend::STABLE);
    let nine: Vec<LogEvent> = (0..9).map(|_| event(LogLevel::Info, "x")).collect();
    assert_eq!(summarize_at(&nine, at()).recent_trend, Trend::STABLE);
}

#[test]
fn trend_for_odd_batch_leans_newer() {
    let eleven: Vec<LogEvent> = (0..11).map(|_| event(LogLevel::Info, "x")).collect();
    let trend = summarize_at(&eleven, at()).recent_trend;
    assert_eq!(trend.direction, TrendDirection::Increasing);
    assert_eq!(trend.percentage, 20);
}

#[test]
fn classify_trend_thresholds() {
    let up = classify_trend(5, 15);
    assert_eq!(up.direction, TrendDirection::Increasing);
    assert_eq!(up.percentage, 200);
    assert_eq!(classify_trend(10, 10), Trend::STABLE);
    let down = classify_trend(15, 5);
    assert_eq!(down.direction, TrendDirection::Decreasing);
    assert_eq!(down.percentage, 67);
    assert_eq!(classify_trend(0, 10), Trend::STABLE);
    assert_eq!(classify_trend(100, 105).direction, TrendDirection::Stable);
    assert_eq!(classify_trend(100, 105).percentage, 5);
    assert_eq!(classify_trend(100, 106).direction, TrendDirection::Increasing);
}

#[test]
fn condense_logs_counts_levels_and_top_source() {
    let events = vec![
        event(LogLevel::Error, "x").with_source("api"),
        event(LogLevel::Fatal, "x").with_source("db"),
        event(LogLevel::Warn, "x").with_source("db"),
        event(LogLevel::Debug, "x").with_source("api"),
        event(LogLevel::Trace, "x"),
        event(LogLevel::Info, "x"),
    ];
    let r = condense_logs_at(&events, at());
    assert_eq!(r.timestamp, "2024-03-02T00:00:00.000Z");
    assert_eq!(extract(&r, "totalLogs"), 6.0);
    assert_eq!(extract(&r, "errorCount"), 2.0);
    assert_eq!(extract(&r, "warnCount"), 1.0);
    assert_eq!(extract(&r, "infoCount"), 1.0);
    assert_eq!(extract(&r, "debugCount"), 2.0);
    assert_eq!(text(&r, "topSource").as_deref(), Some("api"));
    assert_eq!(extract(&r, "topSourceCount"), 2.0);
    assert_eq!(extract(&r, "cpu"), 0.0);
}

#[test]
fn condense_logs_empty_batch() {
    let r = condense_logs_at(&[], at());
    assert_eq!(r.fields.len(), 2);
    assert!(r.contains("cpu") && r.contains("memory"));
}
