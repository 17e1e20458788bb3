// ABOUTME: Time and pace formatting helpers for the presentation layer
// ABOUTME: Renders minutes as "45m 48s" and pace as "4:35 min/km"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Output formatting for predictions.
//!
//! Pure helpers consumed by whatever renders the results list; the engine
//! itself never performs I/O.

use crate::constants::SECONDS_PER_MINUTE;

/// Format a time in minutes as `"45m 48s"`.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    let total_seconds = (minutes * SECONDS_PER_MINUTE).round().max(0.0) as u64;
    format!("{}m {}s", total_seconds / 60, total_seconds % 60)
}

/// Format a pace as `"4:35 min/km"` from a total time and distance.
///
/// Seconds are rounded to the nearest whole second, carrying into the minute
/// component when they round up to 60.
#[must_use]
pub fn format_pace(minutes: f64, km: f64) -> String {
    let pace = minutes / km;
    let mut pace_min = pace.floor().max(0.0) as u64;
    let mut pace_sec = ((pace - pace.floor()) * SECONDS_PER_MINUTE).round() as u64;
    if pace_sec == 60 {
        pace_min += 1;
        pace_sec = 0;
    }
    format!("{pace_min}:{pace_sec:02} min/km")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45.8), "45m 48s");
        assert_eq!(format_minutes(22.0), "22m 0s");
    }

    #[test]
    fn test_format_pace_pads_seconds() {
        // 22.5 min over 5 km = 4.5 min/km
        assert_eq!(format_pace(22.5, 5.0), "4:30 min/km");
        // 21.0 min over 5 km = 4.2 min/km = 4:12
        assert_eq!(format_pace(21.0, 5.0), "4:12 min/km");
    }

    #[test]
    fn test_format_pace_carries_rounded_seconds() {
        // 4.9999 min/km rounds to 5:00, not 4:60
        assert_eq!(format_pace(24.9995, 5.0), "5:00 min/km");
    }
}
