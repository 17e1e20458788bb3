// ABOUTME: Tests for duration-string normalization
// ABOUTME: Validates hh:mm:ss and mm:ss round-trips and rejection of malformed strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use racecast_core::duration::parse_duration;

#[test]
fn test_three_segment_round_trips() {
    let cases = [
        ("1:45:30", 1.0 * 60.0 + 45.0 + 30.0 / 60.0),
        ("0:22:00", 22.0),
        ("2:00:01", 120.0 + 1.0 / 60.0),
    ];
    for (input, expected) in cases {
        let minutes = parse_duration(input).unwrap();
        assert!(
            (minutes - expected).abs() < 1e-12,
            "{input} parsed to {minutes}, expected {expected}"
        );
    }
}

#[test]
fn test_two_segment_round_trips() {
    let cases = [("22:00", 22.0), ("4:30", 4.5), ("59:59", 59.0 + 59.0 / 60.0)];
    for (input, expected) in cases {
        let minutes = parse_duration(input).unwrap();
        assert!(
            (minutes - expected).abs() < 1e-12,
            "{input} parsed to {minutes}, expected {expected}"
        );
    }
}

#[test]
fn test_whitespace_is_tolerated() {
    assert!((parse_duration("  22:30  ").unwrap() - 22.5).abs() < 1e-12);
}

#[test]
fn test_empty_string_is_invalid() {
    assert!(parse_duration("").is_err());
    assert!(parse_duration("   ").is_err());
}

#[test]
fn test_letters_are_invalid() {
    assert!(parse_duration("abc").is_err());
    assert!(parse_duration("12:ab").is_err());
    assert!(parse_duration("1:2x:30").is_err());
}

#[test]
fn test_wrong_segment_count_is_invalid() {
    // A bare number is ambiguous between minutes and seconds
    assert!(parse_duration("22").is_err());
    assert!(parse_duration("1:2:3:4").is_err());
}

#[test]
fn test_negative_segments_are_invalid() {
    assert!(parse_duration("-5:30").is_err());
    assert!(parse_duration("5:-30").is_err());
}
