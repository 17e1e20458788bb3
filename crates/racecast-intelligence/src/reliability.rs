// ABOUTME: Reliability scoring of combined predictions against actual best times
// ABOUTME: Exponential decay of confidence in per-km prediction error, clamped to 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Reliability scoring.
//!
//! `reliability = 100 · exp(−|combined − best| / km / penalty)`, clamped to
//! `[0, 100]`. Defined only when an actual best time exists at the target
//! distance; the engine never fabricates a score for a distance the runner
//! has not raced.

/// Confidence score in percent for a combined prediction versus the actual
/// best time at the same distance.
///
/// `penalty` is in minutes-per-km of error; smaller values drop the score
/// faster. 100 exactly when prediction and best agree.
#[must_use]
pub fn reliability_score(combined_minutes: f64, real_best_minutes: f64, km: f64, penalty: f64) -> f64 {
    let error_per_km = (combined_minutes - real_best_minutes).abs() / km;
    (100.0 * (-error_per_km / penalty).exp()).clamp(0.0, 100.0)
}
