// ABOUTME: Tunable configuration for the prediction engine
// ABOUTME: Retained-per-bucket count, bucket tolerance, trim band, reliability penalty, dense range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Engine tunables.
//!
//! Treated as immutable for the duration of a prediction run. Defaults match
//! the values the engine was calibrated with; callers overriding them must
//! pass the result through [`PredictorConfig::validate`].

use serde::{Deserialize, Serialize};

use racecast_core::errors::{AppError, AppResult};

/// Central percentile band retained when combining candidate estimates.
///
/// Candidates are sorted by time and trimmed to indices
/// `floor(n·lower) .. ceil(n·upper)` before averaging. Narrower bands increase
/// sensitivity to disagreement between the fitted curve and the scaling law,
/// and shrink the reported interval to fewer candidates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimBand {
    /// Lower percentile cut, `0 ≤ lower < upper`
    pub lower: f64,
    /// Upper percentile cut, `lower < upper ≤ 1`
    pub upper: f64,
}

impl Default for TrimBand {
    fn default() -> Self {
        Self {
            lower: 0.25,
            upper: 0.75,
        }
    }
}

/// Tunable configuration for a prediction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Fastest performances retained per distance bucket (K)
    pub best_per_bucket: usize,
    /// Relative tolerance around a target distance for bucket membership
    pub bucket_tolerance: f64,
    /// Percentile band retained when combining candidates
    pub trim_band: TrimBand,
    /// Reliability decay constant in minutes-per-km of error; smaller values
    /// drop the confidence score faster as prediction error grows
    pub reliability_penalty: f64,
    /// Inclusive integer km range swept by the dense curve generator
    pub dense_range_km: (u32, u32),
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            best_per_bucket: 3,
            bucket_tolerance: 0.05,
            trim_band: TrimBand::default(),
            reliability_penalty: 0.5,
            dense_range_km: (1, 42),
        }
    }
}

impl PredictorConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigInvalid` if any tunable is outside its
    /// permitted range.
    pub fn validate(&self) -> AppResult<()> {
        if self.best_per_bucket == 0 {
            return Err(AppError::config("best_per_bucket must be at least 1"));
        }
        if !self.bucket_tolerance.is_finite()
            || self.bucket_tolerance <= 0.0
            || self.bucket_tolerance >= 1.0
        {
            return Err(AppError::config(format!(
                "bucket_tolerance must be in (0, 1), got {}",
                self.bucket_tolerance
            )));
        }
        if !(0.0..=1.0).contains(&self.trim_band.lower)
            || !(0.0..=1.0).contains(&self.trim_band.upper)
            || self.trim_band.lower >= self.trim_band.upper
        {
            return Err(AppError::config(format!(
                "trim band must satisfy 0 <= lower < upper <= 1, got ({}, {})",
                self.trim_band.lower, self.trim_band.upper
            )));
        }
        if !self.reliability_penalty.is_finite() || self.reliability_penalty <= 0.0 {
            return Err(AppError::config(format!(
                "reliability_penalty must be positive, got {}",
                self.reliability_penalty
            )));
        }
        let (start, end) = self.dense_range_km;
        if start == 0 || start > end {
            return Err(AppError::config(format!(
                "dense_range_km must satisfy 1 <= start <= end, got ({start}, {end})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PredictorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_trim_band_rejected() {
        let config = PredictorConfig {
            trim_band: TrimBand {
                lower: 0.6,
                upper: 0.4,
            },
            ..PredictorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_bucket_count_rejected() {
        let config = PredictorConfig {
            best_per_bucket: 0,
            ..PredictorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
