// ABOUTME: Recency decay weighting for past performances
// ABOUTME: Hyperbolic decay in years since the performance; missing dates keep full weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Recency weighting.
//!
//! `weight = 1 / (1 + days_since/365)`: bounded in `(0, 1]`, strictly
//! decreasing in age, approaching zero for very old performances. A missing
//! date gets full weight rather than being treated as maximally stale.

use chrono::NaiveDate;

use racecast_core::constants::DAYS_PER_YEAR;

/// Decay weight for a performance recorded on `date`, as seen from `today`.
///
/// `None` and future dates both yield `1.0`.
#[must_use]
pub fn recency_weight(date: Option<NaiveDate>, today: NaiveDate) -> f64 {
    match date {
        None => 1.0,
        Some(recorded) => {
            let days_since = (today - recorded).num_days().max(0) as f64;
            1.0 / (1.0 + days_since / DAYS_PER_YEAR)
        }
    }
}
