// Reduce a set of records (or plain numbers) to one statistic.

use serde::{Deserialize, Serialize};

use super::extract::{extract, extract_primary};
use crate::models::MetricRecord;

/// Statistic selected for [`aggregate`]. Serializes lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMethod {
    #[default]
    Average,
    Sum,
    Max,
    Min,
    Last,
}

/// Aggregates `record[key]` across `records` (see [`extract`] for missing values).
///
/// Empty input yields `0` for every method, including `Min` and `Max`. That is inherited
/// dashboard behaviour rather than the mathematical identity (`+inf` / `-inf`): aggregating
/// an empty bucket with `Min` will pull a chart's lower bound to zero.
pub fn aggregate(records: &[MetricRecord], method: AggregationMethod, key: &str) -> f64 {
    let values: Vec<f64> = records.iter().map(|r| extract(r, key)).collect();
    aggregate_values(&values, method)
}

/// Like [`aggregate`] but reads each record's headline number via [`extract_primary`],
/// so samples shaped `{"cpu": 40}` or `{"memory": 70}` count as well as `{"value": ..}`.
pub fn aggregate_primary(records: &[MetricRecord], method: AggregationMethod) -> f64 {
    let values: Vec<f64> = records.iter().map(extract_primary).collect();
    aggregate_values(&values, method)
}

/// [`aggregate`] over plain numbers. `Last` is the final element in slice order.
pub fn aggregate_values(values: &[f64], method: AggregationMethod) -> f64 {
    let Some(&last) = values.last() else {
        return 0.0;
    };
    match method {
        AggregationMethod::Average => mean_f64(values),
        AggregationMethod::Sum => values.iter().sum(),
        AggregationMethod::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        AggregationMethod::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregationMethod::Last => last,
    }
}

/// Mean of `record[key]` over only the records that carry `key`; `0` when none do.
pub fn calculate_average(records: &[MetricRecord], key: &str) -> f64 {
    let values: Vec<f64> = records
        .iter()
        .filter(|r| r.contains(key))
        .map(|r| extract(r, key))
        .collect();
    mean_f64(&values)
}

pub(crate) fn mean_f64(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / (v.len() as f64)
}
