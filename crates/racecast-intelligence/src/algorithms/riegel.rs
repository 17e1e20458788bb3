// ABOUTME: Riegel power-law scaling of race times across distances
// ABOUTME: Fixed empirical exponent 1.06, not refit from data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Riegel endurance-scaling law.
//!
//! Formula: `t2 = t1 · (d2/d1)^1.06`
//!
//! The standard allometric scaling law for endurance running performance. The
//! exponent is an empirical constant derived across race distances and is
//! deliberately not refit from a runner's own data.
//!
//! # Scientific References
//!
//! - Riegel, P.S. (1981). "Athletic records and human endurance."
//!   *American Scientist*, 69(3), 285-290.

/// Empirical endurance-scaling exponent
pub const RIEGEL_EXPONENT: f64 = 1.06;

/// Scale a race time from one distance to another.
///
/// Identity when `from_km == to_km`. Returns NaN only when `from_km` is zero;
/// callers guarantee `from_km > 0`.
#[must_use]
pub fn riegel(time_minutes: f64, from_km: f64, to_km: f64) -> f64 {
    time_minutes * (to_km / from_km).powf(RIEGEL_EXPONENT)
}
