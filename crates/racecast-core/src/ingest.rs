// ABOUTME: Conversion of raw activity rows into validated performance records
// ABOUTME: Filters non-Run rows and silently drops malformed distance, time, or date fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Raw-row ingestion.
//!
//! The engine does not own any file format or DOM; it consumes pre-split row
//! values from external collaborators (a Strava activity export or manual form
//! entries) and turns them into validated [`PerformanceRecord`]s. Only rows
//! with activity type `"Run"` are eligible from exports. Malformed rows are
//! dropped silently; one bad row never aborts a run.

use chrono::NaiveDate;
use tracing::debug;

use crate::constants::SECONDS_PER_MINUTE;
use crate::duration::parse_duration;
use crate::errors::AppResult;
use crate::models::PerformanceRecord;

/// Activity type accepted from export rows
pub const RUN_ACTIVITY_TYPE: &str = "Run";

/// A raw row from an activity export, already split into fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RawActivityRow {
    /// Activity type column (e.g., "Run", "Ride")
    pub activity_type: String,
    /// Distance column in kilometers, if the cell parsed as a number
    pub distance_km: Option<f64>,
    /// Elapsed-time column in seconds, if the cell parsed as a number
    pub elapsed_seconds: Option<f64>,
    /// Activity-date column, verbatim
    pub date: Option<String>,
}

/// Convert export rows into validated performance records.
///
/// Non-Run rows and rows with missing or invalid distance/time are skipped.
/// Export rows carry elapsed time in seconds; it is converted to minutes here.
#[must_use]
pub fn records_from_export_rows(rows: &[RawActivityRow]) -> Vec<PerformanceRecord> {
    rows.iter()
        .filter_map(|row| {
            if row.activity_type != RUN_ACTIVITY_TYPE {
                return None;
            }
            let (Some(distance_km), Some(elapsed_seconds)) = (row.distance_km, row.elapsed_seconds)
            else {
                debug!("skipping export row with missing distance or time");
                return None;
            };
            let date = row.date.as_deref().and_then(parse_activity_date);
            match PerformanceRecord::new(distance_km, elapsed_seconds / SECONDS_PER_MINUTE, date) {
                Ok(record) => Some(record),
                Err(error) => {
                    debug!(%error, "skipping invalid export row");
                    None
                }
            }
        })
        .collect()
}

/// Convert one manual form entry into a validated performance record.
///
/// Manual entries carry the time as a duration string (`hh:mm:ss` / `mm:ss`).
///
/// # Errors
///
/// Returns an error if the duration string is malformed or the resulting
/// record fails validation; callers typically drop the entry and continue.
pub fn record_from_manual_entry(
    distance_km: f64,
    duration: &str,
    date: Option<&str>,
) -> AppResult<PerformanceRecord> {
    let time_minutes = parse_duration(duration)?;
    let parsed_date = date.and_then(parse_activity_date);
    PerformanceRecord::new(distance_km, time_minutes, parsed_date)
}

/// Parse an activity date in the formats exports and forms actually produce.
///
/// Tries ISO (`2024-03-01`), the Strava export format
/// (`Mar 1, 2024, 7:00:00 AM`), and a plain datetime. An unparseable date is
/// treated as missing, never as an error: a record without a date still enters
/// the pipeline at full recency weight.
#[must_use]
pub fn parse_activity_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(trimmed, "%b %d, %Y, %I:%M:%S %p") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.date());
    }
    debug!(raw = trimmed, "unparseable activity date, treating as absent");
    None
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_strava_export_date_format() {
        let date = parse_activity_date("Mar 1, 2024, 7:00:00 AM").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_unparseable_date_is_absent() {
        assert!(parse_activity_date("yesterday").is_none());
        assert!(parse_activity_date("").is_none());
    }
}
