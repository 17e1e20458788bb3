// ABOUTME: Tests for multi-source candidate combination
// ABOUTME: Validates sole-candidate passthrough, source weighting, and outlier trimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use racecast_intelligence::combiner::combine_for_target;
use racecast_intelligence::config::PredictorConfig;
use racecast_intelligence::regression::fit_buckets;
use racecast_intelligence::selector::build_buckets;
use racecast_intelligence::{PerformanceRecord, TargetDistance};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn record(distance_km: f64, time_minutes: f64) -> PerformanceRecord {
    PerformanceRecord::new(distance_km, time_minutes, Some(today())).unwrap()
}

#[test]
fn test_sole_real_candidate_passes_through_exactly() {
    let config = PredictorConfig::default();
    let target = TargetDistance::new("5K", 5.0);
    let buckets = build_buckets(&[record(5.0, 22.0)], &[target.clone()], 3, 0.05);

    let combined = combine_for_target(&target, &buckets, None, &config, today()).unwrap();
    assert!((combined.minutes - 22.0).abs() < 1e-12);
    assert!((combined.ci_low - 22.0).abs() < 1e-12);
    assert!((combined.ci_high - 22.0).abs() < 1e-12);
}

#[test]
fn test_no_candidates_yields_none() {
    let config = PredictorConfig::default();
    let target = TargetDistance::new("10K", 10.0);
    let combined = combine_for_target(&target, &[], None, &config, today());
    assert!(combined.is_none());
}

#[test]
fn test_real_results_outweigh_scaling_candidates() {
    // A fast 5K scales to a very optimistic 10K, but the actual 10K result
    // carries weight 3 and must dominate the combination.
    let config = PredictorConfig::default();
    let targets = vec![
        TargetDistance::new("5K", 5.0),
        TargetDistance::new("10K", 10.0),
    ];
    let buckets = build_buckets(&[record(5.0, 18.0), record(10.0, 46.0)], &targets, 3, 0.05);

    let combined =
        combine_for_target(&targets[1], &buckets, None, &config, today()).unwrap();
    let scaled = 18.0 * 2.0_f64.powf(1.06);
    assert!(combined.minutes > (scaled + 46.0) / 2.0);
    assert!(combined.minutes < 46.0);
}

#[test]
fn test_interval_reflects_trimmed_spread() {
    let config = PredictorConfig::default();
    let targets = vec![
        TargetDistance::new("5K", 5.0),
        TargetDistance::new("10K", 10.0),
        TargetDistance::new("Half Marathon", 21.097),
    ];
    let records = vec![
        record(5.0, 22.0),
        record(10.0, 46.0),
        record(21.097, 100.0),
    ];
    let buckets = build_buckets(&records, &targets, 3, 0.05);
    let model = fit_buckets(&buckets);
    assert!(model.is_some());

    let combined =
        combine_for_target(&targets[1], &buckets, model.as_ref(), &config, today()).unwrap();
    assert!(combined.ci_low <= combined.minutes);
    assert!(combined.minutes <= combined.ci_high);
    assert!(combined.ci_low < combined.ci_high);
}

#[test]
fn test_narrower_band_trims_more_aggressively() {
    use racecast_intelligence::config::TrimBand;

    let targets = vec![
        TargetDistance::new("5K", 5.0),
        TargetDistance::new("10K", 10.0),
        TargetDistance::new("Half Marathon", 21.097),
    ];
    let records = vec![
        record(5.0, 22.0),
        record(10.0, 46.0),
        record(21.097, 100.0),
    ];
    let buckets = build_buckets(&records, &targets, 3, 0.05);
    let model = fit_buckets(&buckets);

    let wide_config = PredictorConfig::default();
    let narrow_config = PredictorConfig {
        trim_band: TrimBand {
            lower: 0.4,
            upper: 0.6,
        },
        ..PredictorConfig::default()
    };

    let wide =
        combine_for_target(&targets[0], &buckets, model.as_ref(), &wide_config, today()).unwrap();
    let narrow =
        combine_for_target(&targets[0], &buckets, model.as_ref(), &narrow_config, today())
            .unwrap();
    assert!(narrow.ci_high - narrow.ci_low <= wide.ci_high - wide.ci_low + 1e-12);
}
