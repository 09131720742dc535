// Domain models: plain serializable values shared by the engine and the HTTP layer.

mod interval;
mod log;
mod processed;
mod record;
mod series;
mod snapshot;
mod summary;

pub use interval::MetricsInterval;
pub use log::{LogEvent, LogLevel};
pub use processed::{BatchAggregates, ProcessedMetrics, TimeRange};
pub use record::{MetricRecord, MetricValue, format_timestamp, parse_timestamp};
pub use series::SeriesPoint;
pub use snapshot::{PerformanceSnapshot, SnapshotSamples};
pub use summary::{LogActivitySummary, MessageCount, SourceCount, Trend, TrendDirection};
