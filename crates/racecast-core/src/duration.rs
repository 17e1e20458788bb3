// ABOUTME: Duration-string normalization for race times
// ABOUTME: Parses hh:mm:ss and mm:ss strings into canonical minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Duration-string normalization.
//!
//! Accepts `hh:mm:ss` and `mm:ss`. A single bare number is rejected: without a
//! colon there is no way to tell plain minutes from plain seconds, and call
//! sites must pre-agree on a convention instead.

use crate::errors::{AppError, AppResult};

/// Parse a human race-time string into total minutes.
///
/// `"1:45:30"` → 105.5, `"22:30"` → 22.5.
///
/// # Errors
///
/// Returns `AppError::InvalidFormat` if the string is empty, any
/// colon-separated segment is not a number, or the segment count is not 2 or 3.
pub fn parse_duration(duration: &str) -> AppResult<f64> {
    let trimmed = duration.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_format("duration string is empty"));
    }

    let parts: Vec<f64> = trimmed
        .split(':')
        .map(|segment| {
            segment.trim().parse::<f64>().map_err(|_| {
                AppError::invalid_format(format!("non-numeric duration segment '{segment}'"))
            })
        })
        .collect::<AppResult<_>>()?;

    if parts.iter().any(|value| !value.is_finite() || *value < 0.0) {
        return Err(AppError::invalid_format(format!(
            "duration segments must be finite and non-negative: '{trimmed}'"
        )));
    }

    match parts.as_slice() {
        [hours, minutes, seconds] => Ok(hours * 60.0 + minutes + seconds / 60.0),
        [minutes, seconds] => Ok(minutes + seconds / 60.0),
        _ => Err(AppError::invalid_format(format!(
            "expected mm:ss or hh:mm:ss, got '{trimmed}'"
        ))),
    }
}
