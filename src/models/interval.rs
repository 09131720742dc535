// Sampling granularities for historical ranges.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricsInterval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    /// Accepted on the wire; never recommended.
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl MetricsInterval {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricsInterval::OneMinute => "1m",
            MetricsInterval::FiveMinutes => "5m",
            MetricsInterval::FifteenMinutes => "15m",
            MetricsInterval::OneHour => "1h",
            MetricsInterval::SixHours => "6h",
            MetricsInterval::OneDay => "1d",
            MetricsInterval::SevenDays => "7d",
            MetricsInterval::ThirtyDays => "30d",
        }
    }

    pub fn duration(self) -> Duration {
        const MIN: u64 = 60;
        const HOUR: u64 = 60 * MIN;
        const DAY: u64 = 24 * HOUR;
        Duration::from_secs(match self {
            MetricsInterval::OneMinute => MIN,
            MetricsInterval::FiveMinutes => 5 * MIN,
            MetricsInterval::FifteenMinutes => 15 * MIN,
            MetricsInterval::OneHour => HOUR,
            MetricsInterval::SixHours => 6 * HOUR,
            MetricsInterval::OneDay => DAY,
            MetricsInterval::SevenDays => 7 * DAY,
            MetricsInterval::ThirtyDays => 30 * DAY,
        })
    }
}

impl fmt::Display for MetricsInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
