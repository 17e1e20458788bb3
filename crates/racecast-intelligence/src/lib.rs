// ABOUTME: Race-time prediction algorithms and analysis engine for Racecast
// ABOUTME: Riegel scaling, recency weighting, quadratic curve fitting, and multi-source combination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

#![deny(unsafe_code)]

//! # Racecast Intelligence
//!
//! The prediction engine: a pure, stateless pipeline from a sparse set of past
//! running performances to expected finish times at canonical race distances,
//! each with an uncertainty band and, where an actual best time exists, a
//! reliability score.
//!
//! Pipeline: performance records → best-performance buckets → log-quadratic
//! curve fit → per-target multi-source combination (Riegel scaling, fitted
//! curve, actual bests) → reliability scoring. The dense-curve generator runs
//! the same combination at every integer distance for charting.
//!
//! ## Modules
//!
//! - **algorithms**: Riegel scaling law and recency decay weighting
//! - **config**: Tunables (retained-per-bucket count, trim band, penalty)
//! - **selector**: Best-performance bucketing around target distances
//! - **regression**: Log-quadratic least-squares curve fitting
//! - **combiner**: Trimmed, weighted combination of heterogeneous estimates
//! - **reliability**: Confidence scoring against actual best times
//! - **curve**: Dense predicted-time curve for visualization
//! - **engine**: The [`engine::RacePredictor`] façade tying the pipeline together

/// Riegel scaling law and recency decay weighting
pub mod algorithms;

/// Engine tunables with validation
pub mod config;

/// Best-performance bucketing around target distances
pub mod selector;

/// Log-quadratic least-squares curve fitting
pub mod regression;

/// Trimmed, weighted combination of heterogeneous candidate estimates
pub mod combiner;

/// Reliability scoring against actual best times
pub mod reliability;

/// Dense predicted-time curve generation
pub mod curve;

/// Prediction engine façade
pub mod engine;

pub use racecast_core::constants::canonical_targets;
pub use racecast_core::errors::{AppError, AppResult};
pub use racecast_core::models::{CurvePoint, PerformanceRecord, PredictionResult, TargetDistance};
