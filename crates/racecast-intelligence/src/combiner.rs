// ABOUTME: Multi-source combination of candidate time estimates per target distance
// ABOUTME: Gathers scaling, model, and real candidates, trims outliers, and averages by weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Multi-source combination.
//!
//! For one target distance, three kinds of candidates compete:
//!
//! 1. **Scaling** — every record in every *other* bucket, Riegel-scaled to the
//!    target; weighted by recency times `1/(time/from_km)²`, favoring
//!    estimates derived from shorter efforts with proportionally less pacing
//!    noise.
//! 2. **Model** — the fitted curve's point estimate (weight 2) plus the
//!    estimate ± `residual_std_dev·(km/5)` at weight 1 each; the `km/5` factor
//!    widens the band for longer targets, where absolute pacing variance
//!    grows.
//! 3. **Real** — actual results in the target's own bucket, weight 3 times
//!    recency; same-distance results are trusted most.
//!
//! Candidates are sorted by time, trimmed to the configured central percentile
//! band, and averaged by weight. The interval is the observed spread of the
//! trimmed set, not a parametric confidence interval.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use racecast_core::models::TargetDistance;

use crate::algorithms::{recency_weight, riegel};
use crate::config::PredictorConfig;
use crate::regression::RegressionModel;
use crate::selector::DistanceBucket;

/// Structural weight of the model's point estimate
const MODEL_POINT_WEIGHT: f64 = 2.0;
/// Structural weight of each model band-edge estimate
const MODEL_BAND_WEIGHT: f64 = 1.0;
/// Structural weight of an actual same-distance result
const REAL_WEIGHT: f64 = 3.0;
/// Reference distance for scaling the model's residual band, in km
const BAND_REFERENCE_KM: f64 = 5.0;

/// Where a candidate estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    /// Riegel-scaled from a performance at another distance
    Scaling,
    /// Fitted log-quadratic curve
    Model,
    /// Actual result at the target distance
    Real,
}

/// One candidate time estimate for a target distance.
///
/// Ephemeral: produced and consumed within a single combination step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateEstimate {
    /// Estimated time in minutes
    pub time_minutes: f64,
    /// Positive combination weight
    pub weight: f64,
    /// Provenance of the estimate
    pub source: EstimateSource,
}

/// Point estimate and interval produced by one combination step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedEstimate {
    /// Weight-normalized average of the trimmed candidates, in minutes
    pub minutes: f64,
    /// Fastest trimmed candidate, in minutes
    pub ci_low: f64,
    /// Slowest trimmed candidate, in minutes
    pub ci_high: f64,
}

/// Combine all available candidate estimates for one target distance.
///
/// Returns `None` when no candidate exists, in which case the target is
/// omitted from the prediction output entirely.
#[must_use]
pub fn combine_for_target(
    target: &TargetDistance,
    buckets: &[DistanceBucket],
    model: Option<&RegressionModel>,
    config: &PredictorConfig,
    today: NaiveDate,
) -> Option<CombinedEstimate> {
    let mut candidates = gather_candidates(target, buckets, model, today);
    if candidates.is_empty() {
        return None;
    }

    candidates.sort_by(|a, b| a.time_minutes.total_cmp(&b.time_minutes));
    let trimmed = trim_to_band(&candidates, config.trim_band.lower, config.trim_band.upper);

    let weight_sum: f64 = trimmed.iter().map(|candidate| candidate.weight).sum();
    let weighted_time_sum: f64 = trimmed
        .iter()
        .map(|candidate| candidate.time_minutes * candidate.weight)
        .sum();

    trace!(
        label = %target.label,
        candidates = candidates.len(),
        trimmed = trimmed.len(),
        "combined candidate estimates"
    );

    Some(CombinedEstimate {
        minutes: weighted_time_sum / weight_sum,
        ci_low: trimmed[0].time_minutes,
        ci_high: trimmed[trimmed.len() - 1].time_minutes,
    })
}

/// Gather scaling, model, and real candidates for one target.
fn gather_candidates(
    target: &TargetDistance,
    buckets: &[DistanceBucket],
    model: Option<&RegressionModel>,
    today: NaiveDate,
) -> Vec<CandidateEstimate> {
    let mut candidates = Vec::new();

    for bucket in buckets {
        if is_same_distance(bucket.target.km, target.km) {
            for record in &bucket.records {
                candidates.push(CandidateEstimate {
                    time_minutes: record.time_minutes,
                    weight: REAL_WEIGHT * recency_weight(record.date, today),
                    source: EstimateSource::Real,
                });
            }
        } else {
            let from_km = bucket.target.km;
            for record in &bucket.records {
                let pace = record.time_minutes / from_km;
                candidates.push(CandidateEstimate {
                    time_minutes: riegel(record.time_minutes, from_km, target.km),
                    weight: recency_weight(record.date, today) / (pace * pace),
                    source: EstimateSource::Scaling,
                });
            }
        }
    }

    if let Some(model) = model {
        let estimate = model.predict_at_km(target.km);
        let band = model.residual_std_dev * (target.km / BAND_REFERENCE_KM);
        candidates.push(CandidateEstimate {
            time_minutes: estimate,
            weight: MODEL_POINT_WEIGHT,
            source: EstimateSource::Model,
        });
        candidates.push(CandidateEstimate {
            time_minutes: estimate - band,
            weight: MODEL_BAND_WEIGHT,
            source: EstimateSource::Model,
        });
        candidates.push(CandidateEstimate {
            time_minutes: estimate + band,
            weight: MODEL_BAND_WEIGHT,
            source: EstimateSource::Model,
        });
    }

    candidates
}

/// Slice the central percentile band out of time-sorted candidates.
///
/// Indices `floor(n·lower) .. ceil(n·upper)`; the band is never empty because
/// the config validator enforces `lower < upper`.
fn trim_to_band(sorted: &[CandidateEstimate], lower: f64, upper: f64) -> &[CandidateEstimate] {
    let n = sorted.len();
    let lo = ((n as f64 * lower).floor() as usize).min(n - 1);
    let hi = ((n as f64 * upper).ceil() as usize).clamp(lo + 1, n);
    &sorted[lo..hi]
}

/// Two target kms count as the same bucket distance when they coincide exactly
/// (canonical targets and dense-curve integers both compare against the same
/// canonical list).
fn is_same_distance(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
