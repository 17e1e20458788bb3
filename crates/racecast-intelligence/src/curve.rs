// ABOUTME: Dense predicted-time curve generation for visualization
// ABOUTME: Runs the multi-source combiner at every integer km over a configurable range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Dense curve generation.
//!
//! Reuses the combiner at every integer distance in the configured range to
//! produce a smooth `(km, minutes)` series for chart rendering. Read-only with
//! respect to the buckets and the fitted model; its output never feeds back
//! into the canonical predictions. The sweep is CPU-bound and embarrassingly
//! parallel, so it runs on rayon.

use chrono::NaiveDate;
use rayon::prelude::*;

use racecast_core::models::{CurvePoint, TargetDistance};

use crate::combiner::combine_for_target;
use crate::config::PredictorConfig;
use crate::regression::RegressionModel;
use crate::selector::DistanceBucket;

/// Predicted time at every integer km in `config.dense_range_km`, in order.
///
/// Distances with no candidate estimate are skipped, so the curve can have
/// gaps when the performance set is very sparse.
#[must_use]
pub fn dense_curve(
    buckets: &[DistanceBucket],
    model: Option<&RegressionModel>,
    config: &PredictorConfig,
    today: NaiveDate,
) -> Vec<CurvePoint> {
    let (start, end) = config.dense_range_km;
    (start..=end)
        .into_par_iter()
        .filter_map(|km| {
            let target = TargetDistance::new(format!("{km} km"), f64::from(km));
            combine_for_target(&target, buckets, model, config, today).map(|combined| CurvePoint {
                km: f64::from(km),
                minutes: combined.minutes,
            })
        })
        .collect()
}
