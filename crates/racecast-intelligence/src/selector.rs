// ABOUTME: Best-performance bucketing around canonical target distances
// ABOUTME: Retains the top-K fastest performances within a relative tolerance of each target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Best-performance selection.
//!
//! For each target distance, performances within ±tolerance of the target are
//! collected, sorted fastest-first (stable, so equal times keep input order),
//! and truncated to the K fastest. A target with no matching performances gets
//! no bucket at all. Buckets are rebuilt fresh on every prediction run.

use tracing::trace;

use racecast_core::models::{PerformanceRecord, TargetDistance};

/// Performances representative of one target distance, fastest first.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceBucket {
    /// The target distance this bucket represents
    pub target: TargetDistance,
    /// Up to K records, sorted ascending by time
    pub records: Vec<PerformanceRecord>,
}

impl DistanceBucket {
    /// The fastest actual time in this bucket, in minutes.
    ///
    /// Buckets are never constructed empty, but the accessor stays total.
    #[must_use]
    pub fn best_time_minutes(&self) -> Option<f64> {
        self.records.first().map(|record| record.time_minutes)
    }
}

/// Bucket performances around the given targets, keeping the K fastest each.
///
/// Targets with no performance within `tolerance` (relative, e.g. 0.05 for
/// ±5%) are omitted. The returned buckets follow the order of `targets`.
#[must_use]
pub fn build_buckets(
    records: &[PerformanceRecord],
    targets: &[TargetDistance],
    best_per_bucket: usize,
    tolerance: f64,
) -> Vec<DistanceBucket> {
    targets
        .iter()
        .filter_map(|target| {
            let low = target.km * (1.0 - tolerance);
            let high = target.km * (1.0 + tolerance);
            let mut matching: Vec<PerformanceRecord> = records
                .iter()
                .filter(|record| record.distance_km >= low && record.distance_km <= high)
                .cloned()
                .collect();
            if matching.is_empty() {
                return None;
            }
            matching.sort_by(|a, b| a.time_minutes.total_cmp(&b.time_minutes));
            matching.truncate(best_per_bucket);
            trace!(
                label = %target.label,
                kept = matching.len(),
                "bucketed performances"
            );
            Some(DistanceBucket {
                target: target.clone(),
                records: matching,
            })
        })
        .collect()
}
