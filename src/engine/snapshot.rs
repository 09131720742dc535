// Performance snapshot: a fixed field -> (series, method) mapping.

use chrono::{DateTime, Utc};

use super::aggregate::{AggregationMethod, aggregate_primary};
use crate::models::{PerformanceSnapshot, SnapshotSamples, format_timestamp};

/// Builds a snapshot stamped with the current time.
pub fn build_snapshot(samples: &SnapshotSamples) -> PerformanceSnapshot {
    build_snapshot_at(samples, Utc::now())
}

/// Builds a snapshot stamped with `at`. Gauges average, counters sum, and
/// point-in-time populations take the last sample. Each sample contributes its
/// `value`, falling back to `cpu` then `memory`.
pub fn build_snapshot_at(samples: &SnapshotSamples, at: DateTime<Utc>) -> PerformanceSnapshot {
    use AggregationMethod::{Average, Last, Sum};

    PerformanceSnapshot {
        timestamp: format_timestamp(at),
        cpu: aggregate_primary(&samples.cpu, Average),
        memory: aggregate_primary(&samples.memory, Average),
        active_connections: aggregate_primary(&samples.connections, Last),
        requests_per_minute: aggregate_primary(&samples.requests, Sum),
        errors_per_minute: aggregate_primary(&samples.errors, Sum),
        average_response_time: aggregate_primary(&samples.response_times, Average),
        active_users: aggregate_primary(&samples.users, Last),
    }
}
