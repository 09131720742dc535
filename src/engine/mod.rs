//! Pure, synchronous transformations over metric records, series and log events.
//!
//! Nothing here performs I/O or holds state; every function may be called from any
//! thread. Bad input degrades to zeros or empty results rather than errors.

pub mod aggregate;
pub mod condense;
pub mod downsample;
pub mod extract;
pub mod interval;
pub mod logs;
pub mod snapshot;

pub use aggregate::{
    AggregationMethod, aggregate, aggregate_primary, aggregate_values, calculate_average,
};
pub use condense::{bucket_by_minute, condense, minute_floor, process_metrics};
pub use downsample::downsample;
pub use extract::{extract, extract_primary, try_extract};
pub use interval::recommend_interval;
pub use logs::{classify_trend, condense_logs, condense_logs_at, summarize, summarize_at};
pub use snapshot::{build_snapshot, build_snapshot_at};
