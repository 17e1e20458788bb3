// ABOUTME: Canonical race distances and shared numeric constants
// ABOUTME: Single source of truth for Mile/5K/10K/Half/Marathon distances in km
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Canonical race distances.
//!
//! One authoritative value per distance, applied uniformly: IAAF half marathon
//! 21.097 km and marathon 42.195 km.

use crate::models::TargetDistance;

/// One mile in kilometers
pub const MILE_KM: f64 = 1.609;

/// 5K race distance in kilometers
pub const FIVE_K_KM: f64 = 5.0;

/// 10K race distance in kilometers
pub const TEN_K_KM: f64 = 10.0;

/// Half marathon distance in kilometers
pub const HALF_MARATHON_KM: f64 = 21.097;

/// Marathon distance in kilometers
pub const MARATHON_KM: f64 = 42.195;

/// Days per year used by recency decay
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// The canonical, ordered set of target distances the engine predicts for.
///
/// Rebuilt on each call so callers own their copy; the engine treats the list
/// as read-only reference data for the duration of a run.
#[must_use]
pub fn canonical_targets() -> Vec<TargetDistance> {
    vec![
        TargetDistance::new("Mile (1.609 km)", MILE_KM),
        TargetDistance::new("5K", FIVE_K_KM),
        TargetDistance::new("10K", TEN_K_KM),
        TargetDistance::new("Half Marathon", HALF_MARATHON_KM),
        TargetDistance::new("Marathon", MARATHON_KM),
    ]
}
