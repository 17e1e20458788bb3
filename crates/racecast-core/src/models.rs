// ABOUTME: Domain models for the Racecast prediction engine
// ABOUTME: Performance records, target distances, prediction results, and curve points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Domain data model for race-time prediction.
//!
//! A prediction run is a pure function of a set of [`PerformanceRecord`]s and a
//! read-only list of [`TargetDistance`]s, producing one [`PredictionResult`]
//! per target for which at least one estimate exists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A single past running performance at an arbitrary distance.
///
/// Immutable once created. Construction via [`PerformanceRecord::new`]
/// validates that distance and time are finite and strictly positive, so
/// invalid records never enter the prediction pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Race distance in kilometers (finite, > 0)
    pub distance_km: f64,
    /// Elapsed time in minutes (finite, > 0)
    pub time_minutes: f64,
    /// Date the performance was recorded, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl PerformanceRecord {
    /// Create a validated performance record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if distance or time is non-finite or
    /// not strictly positive.
    pub fn new(distance_km: f64, time_minutes: f64, date: Option<NaiveDate>) -> AppResult<Self> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "distance must be finite and positive, got {distance_km}"
            )));
        }
        if !time_minutes.is_finite() || time_minutes <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "time must be finite and positive, got {time_minutes} minutes"
            )));
        }
        Ok(Self {
            distance_km,
            time_minutes,
            date,
        })
    }

    /// Average pace in minutes per kilometer
    #[must_use]
    pub fn pace_min_per_km(&self) -> f64 {
        self.time_minutes / self.distance_km
    }
}

/// A canonical race distance the engine predicts for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDistance {
    /// Display label (e.g., "5K", "Half Marathon")
    pub label: String,
    /// Distance in kilometers (> 0)
    pub km: f64,
}

impl TargetDistance {
    /// Create a target distance
    #[must_use]
    pub fn new(label: impl Into<String>, km: f64) -> Self {
        Self {
            label: label.into(),
            km,
        }
    }
}

/// One combined prediction for a single target distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Label of the target distance
    pub label: String,
    /// Target distance in kilometers
    pub km: f64,
    /// Combined point estimate in minutes
    pub combined_minutes: f64,
    /// Lower bound of the trimmed-candidate spread in minutes
    pub ci_low: f64,
    /// Upper bound of the trimmed-candidate spread in minutes
    pub ci_high: f64,
    /// Confidence score in percent, present only when an actual best time
    /// exists at this distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reliability_percent: Option<f64>,
}

impl PredictionResult {
    /// Predicted pace in minutes per kilometer
    #[must_use]
    pub fn pace_min_per_km(&self) -> f64 {
        self.combined_minutes / self.km
    }
}

/// A single point of the dense predicted-pace curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Distance in kilometers
    pub km: f64,
    /// Predicted time in minutes
    pub minutes: f64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_record_rejects_non_positive_distance() {
        assert!(PerformanceRecord::new(0.0, 22.0, None).is_err());
        assert!(PerformanceRecord::new(-5.0, 22.0, None).is_err());
    }

    #[test]
    fn test_record_rejects_non_finite_values() {
        assert!(PerformanceRecord::new(f64::NAN, 22.0, None).is_err());
        assert!(PerformanceRecord::new(5.0, f64::INFINITY, None).is_err());
    }

    #[test]
    fn test_record_pace() {
        let record = PerformanceRecord::new(5.0, 22.5, None).unwrap();
        assert!((record.pace_min_per_km() - 4.5).abs() < 1e-12);
    }
}
