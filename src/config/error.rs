// ABOUTME: Configuration error type for environment loading and validation
// ABOUTME: Converts into AppError with the CONFIG_INVALID code at service boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

use thiserror::Error;
use vetflow_core::errors::{AppError, ErrorCode};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A lower bound is not strictly below its upper bound
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable is set but unreadable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value is outside its permitted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}
