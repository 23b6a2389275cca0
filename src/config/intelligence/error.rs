// ABOUTME: Configuration error type for nutrition table validation
// ABOUTME: Raised when coefficients, factors or macro percentages are inconsistent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use crate::errors::{AppError, ErrorCode};

/// Errors raised while validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value lies outside its meaningful range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Percentages that must add up to a whole do not
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
