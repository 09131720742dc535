// LTTB downsampling tests: identity, endpoints, size contract, shape preservation

mod common;

use common::*;
use metrics_condenser::engine::downsample;
use metrics_condenser::models::SeriesPoint;

fn wave(n: usize) -> Vec<SeriesPoint> {
    (0..n)
        .map(|i| point(i as i64 * 10, ((i as f64) / 7.0).sin() * 50.0 + (i % 3) as f64))
        .collect()
}

#[test]
fn downsample_short_series_is_unchanged() {
    let series = wave(8);
    assert_eq!(downsample(&series, 8), series);
    assert_eq!(downsample(&series, 20), series);
    assert!(downsample(&[], 5).is_empty());
}

#[test]
fn downsample_keeps_endpoints_and_exact_size() {
    let series = wave(1000);
    for target in [3, 10, 57, 999] {
        let out = downsample(&series, target);
        assert_eq!(out.len(), target);
        assert_eq!(out.first(), series.first());
        assert_eq!(out.last(), series.last());
    }
}

#[test]
fn downsample_output_is_chronological_subset() {
    let series = wave(250);
    let out = downsample(&series, 40);
    let millis: Vec<i64> = out.iter().map(|p| p.epoch_millis().unwrap()).collect();
    assert!(millis.windows(2).all(|w| w[0] < w[1]));
    assert!(out.iter().all(|p| series.contains(p)));
}

#[test]
fn downsample_two_targets_returns_endpoints_only() {
    let series = wave(50);
    let out = downsample(&series, 2);
    assert_eq!(out, vec![series[0].clone(), series[49].clone()]);
}

#[test]
fn downsample_picks_largest_triangle() {
    let series = vec![
        point(0, 0.0),
        point(1, 1.0),
        point(2, 10.0),
        point(3, 2.0),
        point(4, 0.0),
    ];
    let out = downsample(&series, 3);
    assert_eq!(out, vec![series[0].clone(), series[2].clone(), series[4].clone()]);
}

#[test]
fn downsample_preserves_isolated_spike() {
    let series: Vec<SeriesPoint> = (0..101)
        .map(|i| point(i, if i == 50 { 100.0 } else { 0.0 }))
        .collect();
    let out = downsample(&series, 12);
    assert_eq!(out.len(), 12);
    assert!(out.iter().any(|p| p.value == 100.0));
}

#[test]
fn downsample_skips_points_with_bad_timestamps() {
    let mut series = vec![
        point(0, 0.0),
        point(1, 1.0),
        point(2, 10.0),
        point(3, 2.0),
        point(4, 0.0),
    ];
    series[2].timestamp = "garbage".into();
    let out = downsample(&series, 3);
    assert_eq!(out[1], series[3]);
}
