// ABOUTME: Leaf prediction algorithms shared by the engine
// ABOUTME: Riegel endurance scaling and recency decay weighting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Leaf algorithms: cross-distance scaling and age-based decay weights.

pub mod recency;
pub mod riegel;

pub use recency::recency_weight;
pub use riegel::{riegel, RIEGEL_EXPONENT};
