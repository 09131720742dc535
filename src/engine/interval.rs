// Sampling granularity for a requested range.

use chrono::{DateTime, Utc};

use crate::models::MetricsInterval;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Upper bound (inclusive, in hours) of each bracket; longer ranges get seven days.
const BRACKETS: [(f64, MetricsInterval); 6] = [
    (1.0, MetricsInterval::OneMinute),
    (6.0, MetricsInterval::FiveMinutes),
    (24.0, MetricsInterval::FifteenMinutes),
    (72.0, MetricsInterval::OneHour),
    (168.0, MetricsInterval::SixHours),
    (720.0, MetricsInterval::OneDay),
];

/// Picks an interval from the length of `[start, end]`. Inverted ranges read as one minute.
pub fn recommend_interval(start: DateTime<Utc>, end: DateTime<Utc>) -> MetricsInterval {
    let hours = (end - start).num_milliseconds() as f64 / MS_PER_HOUR;
    BRACKETS
        .iter()
        .find(|(max_hours, _)| hours <= *max_hours)
        .map(|(_, interval)| *interval)
        .unwrap_or(MetricsInterval::SevenDays)
}
