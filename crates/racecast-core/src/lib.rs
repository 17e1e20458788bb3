// ABOUTME: Core types and parsing for the Racecast prediction engine
// ABOUTME: Foundation crate with error handling, domain models, duration parsing, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

#![deny(unsafe_code)]

//! # Racecast Core
//!
//! Foundation crate for the Racecast race-time prediction engine. Holds the
//! pieces that change infrequently: error handling, the domain data model,
//! duration parsing, canonical race distances, and output formatters. The
//! prediction algorithms themselves live in `racecast-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `AppResult`
//! - **models**: Domain models (`PerformanceRecord`, `TargetDistance`, `PredictionResult`)
//! - **constants**: Canonical race distances and shared numeric constants
//! - **duration**: Duration-string normalization (`hh:mm:ss` / `mm:ss` to minutes)
//! - **formatters**: Time and pace formatting for the presentation layer
//! - **ingest**: Conversion of raw activity rows into validated records

/// Unified error handling with standard error codes
pub mod errors;

/// Domain data models for performances, targets, and predictions
pub mod models;

/// Canonical race distances and shared numeric constants
pub mod constants;

/// Duration-string normalization
pub mod duration;

/// Time and pace formatting for external presentation
pub mod formatters;

/// Conversion of raw activity rows into validated performance records
pub mod ingest;
