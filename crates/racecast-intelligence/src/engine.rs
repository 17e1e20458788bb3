// ABOUTME: Prediction engine façade tying the full pipeline together
// ABOUTME: Buckets, fits, combines, and scores; pure and stateless per run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! The prediction engine façade.
//!
//! One prediction run is one pure, synchronous function of its input
//! performance set: no engine-owned state survives between calls, and
//! concurrent runs are independent. The only shared inputs are the read-only
//! target list and the tunables, both immutable for the duration of a run.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use racecast_core::constants::canonical_targets;
use racecast_core::errors::AppResult;
use racecast_core::models::{CurvePoint, PerformanceRecord, PredictionResult, TargetDistance};

use crate::combiner::combine_for_target;
use crate::config::PredictorConfig;
use crate::curve;
use crate::regression::{fit_buckets, RegressionModel};
use crate::reliability::reliability_score;
use crate::selector::{build_buckets, DistanceBucket};

/// Race-time predictor over a fixed target list and tunable configuration.
#[derive(Debug, Clone)]
pub struct RacePredictor {
    targets: Vec<TargetDistance>,
    config: PredictorConfig,
    /// Reference date for recency weighting; injectable for determinism
    today: NaiveDate,
}

impl Default for RacePredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl RacePredictor {
    /// Predictor over the canonical distances with default tunables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            targets: canonical_targets(),
            config: PredictorConfig::default(),
            today: Utc::now().date_naive(),
        }
    }

    /// Predictor with custom tunables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigInvalid` if the configuration fails
    /// validation.
    pub fn with_config(config: PredictorConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Replace the target-distance list (user-editable in some frontends).
    #[must_use]
    pub fn with_targets(mut self, targets: Vec<TargetDistance>) -> Self {
        self.targets = targets;
        self
    }

    /// Pin the recency reference date. Defaults to today.
    #[must_use]
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Predict finish times at every target distance with at least one
    /// candidate estimate.
    ///
    /// Empty input yields an empty output, never an error. Targets without
    /// candidates are omitted.
    #[must_use]
    pub fn predict(&self, records: &[PerformanceRecord]) -> Vec<PredictionResult> {
        let (buckets, model) = self.prepare(records);

        self.targets
            .iter()
            .filter_map(|target| {
                let combined =
                    combine_for_target(target, &buckets, model.as_ref(), &self.config, self.today)?;
                let reliability_percent = buckets
                    .iter()
                    .find(|bucket| (bucket.target.km - target.km).abs() < 1e-9)
                    .and_then(DistanceBucket::best_time_minutes)
                    .map(|best| {
                        reliability_score(
                            combined.minutes,
                            best,
                            target.km,
                            self.config.reliability_penalty,
                        )
                    });
                Some(PredictionResult {
                    label: target.label.clone(),
                    km: target.km,
                    combined_minutes: combined.minutes,
                    ci_low: combined.ci_low,
                    ci_high: combined.ci_high,
                    reliability_percent,
                })
            })
            .collect()
    }

    /// Predicted time at every integer km in the configured dense range, for
    /// chart rendering.
    #[must_use]
    pub fn dense_curve(&self, records: &[PerformanceRecord]) -> Vec<CurvePoint> {
        let (buckets, model) = self.prepare(records);
        curve::dense_curve(&buckets, model.as_ref(), &self.config, self.today)
    }

    /// Bucket the performance set and fit the curve; shared by both entry
    /// points so a run sees one consistent view of the data.
    fn prepare(&self, records: &[PerformanceRecord]) -> (Vec<DistanceBucket>, Option<RegressionModel>) {
        let buckets = build_buckets(
            records,
            &self.targets,
            self.config.best_per_bucket,
            self.config.bucket_tolerance,
        );
        let model = fit_buckets(&buckets);
        debug!(
            records = records.len(),
            buckets = buckets.len(),
            has_model = model.is_some(),
            "prepared prediction run"
        );
        (buckets, model)
    }
}
