// Largest-Triangle-Three-Buckets downsampling for chart series.

use crate::models::SeriesPoint;

/// Reduces `series` to `target_points` points while keeping its visual shape.
///
/// Series no longer than `target_points` are returned unchanged. Otherwise the first and
/// last points are kept and the interior is split by index into `target_points - 2` buckets.
/// From each bucket the point forming the largest triangle with the previously *selected*
/// point and the first point past the bucket is kept. Time is measured in epoch
/// milliseconds. Input must be in ascending time order; that is not checked.
///
/// With `target_points <= 2` only the endpoints are returned.
pub fn downsample(series: &[SeriesPoint], target_points: usize) -> Vec<SeriesPoint> {
    let n = series.len();
    if n <= target_points {
        return series.to_vec();
    }
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Vec::new();
    };
    if target_points <= 2 {
        return vec![first.clone(), last.clone()];
    }

    // Candidates with an unparseable timestamp can never win a bucket.
    let times: Vec<Option<f64>> = series
        .iter()
        .map(|p| p.epoch_millis().map(|ms| ms as f64))
        .collect();
    let interior = n - 2;
    let buckets = target_points - 2;

    let mut selected = Vec::with_capacity(target_points);
    selected.push(0usize);

    for i in 1..=buckets {
        let bucket_start = (i - 1) * interior / buckets + 1;
        let bucket_end = i * interior / buckets + 1;
        let a = *selected.last().unwrap_or(&0);
        let c = bucket_end.min(n - 1);

        let mut max_area = 0.0;
        let mut max_index = bucket_start;
        for b in bucket_start..bucket_end {
            let Some(area) = triangle_area(series, &times, a, b, c) else {
                continue;
            };
            if area > max_area {
                max_area = area;
                max_index = b;
            }
        }
        selected.push(max_index);
    }
    selected.push(n - 1);

    selected.into_iter().map(|i| series[i].clone()).collect()
}

/// Area of the triangle `(a, b, c)` in the (epoch ms, value) plane.
fn triangle_area(
    series: &[SeriesPoint],
    times: &[Option<f64>],
    a: usize,
    b: usize,
    c: usize,
) -> Option<f64> {
    let (ta, tb, tc) = (times[a]?, times[b]?, times[c]?);
    let (va, vb, vc) = (series[a].value, series[b].value, series[c].value);
    let area = ((ta - tc) * (vb - va) - (ta - tb) * (vc - va)).abs() * 0.5;
    area.is_finite().then_some(area)
}
