// ABOUTME: Unified error handling for the Racecast engine
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! # Unified Error Handling
//!
//! Centralized error types for the Racecast engine. Every fallible operation
//! returns [`AppResult`]; per-record failures (a malformed duration, a
//! non-finite distance) are recoverable by design and are dropped by callers
//! rather than aborting a prediction run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input value failed validation (non-finite, non-positive, wrong shape)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Input string did not match any accepted format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// Numeric value outside its permitted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// Tunable configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Human-readable description of the error category
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::InvalidFormat => "Invalid format",
            Self::ValueOutOfRange => "Value out of range",
            Self::ConfigInvalid => "Invalid configuration",
            Self::InternalError => "Internal error",
        }
    }
}

/// Application error carrying a standard code and a human-readable message
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Standard error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid format
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value out of range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
