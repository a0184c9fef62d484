// ABOUTME: Unified error handling with standard error codes for the nutrition calculator
// ABOUTME: Defines AppError, ErrorCode, ErrorContext, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! # Unified Error Handling System
//!
//! Validation, catalog loading, history persistence, and configuration all report
//! failures through [`AppError`]. The energy and recommendation formulas themselves
//! are total and never produce one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed or semantically invalid input
    InvalidInput = 3000,
    /// A required field is absent
    MissingRequiredField = 3001,
    /// Numeric input outside its accepted bounds
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Requested entity does not exist
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration loaded but failed validation
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Reading or writing persisted data failed
    StorageError = 9002,
    /// JSON encoding or decoding failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether retrying the same operation could succeed
    ///
    /// Only I/O failures other than a missing file qualify.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::StorageError)
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Resource ID if applicable (product id, history entry id)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Numeric value outside its accepted range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Required field missing
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error payload handed to presentation layers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Whether the caller may retry
    pub recoverable: bool,
    /// Structured context
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            recoverable: error.code.is_recoverable(),
            message: error.message,
            details: error.context.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_creation() {
        let error = AppError::missing_field("brand").with_resource_id("abc");

        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.context.resource_id.as_deref(), Some("abc"));
        assert_eq!(error.message, "brand is required");
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::value_out_of_range("Weight must be at least 0.1 kg");
        let rendered = error.to_string();
        assert!(rendered.starts_with("The provided value is outside the acceptable range"));
        assert!(rendered.ends_with("Weight must be at least 0.1 kg"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::from(io::Error::new(io::ErrorKind::Interrupted, "read aborted"))
            .with_details(serde_json::json!({ "path": "products.json" }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("STORAGE_ERROR"));
        assert!(json.contains("\"recoverable\":true"));
        assert!(json.contains("products.json"));
    }

    #[test]
    fn test_validation_errors_are_not_recoverable() {
        let response = ErrorResponse::from(
            AppError::value_out_of_range("Weight must be at most 100 kg")
                .with_details(serde_json::json!({ "field": "weight" })),
        );

        assert_eq!(response.code, ErrorCode::ValueOutOfRange);
        assert!(!response.recoverable);
        assert_eq!(response.details["field"], "weight");
    }

    #[test]
    fn test_io_not_found_maps_to_resource_not_found() {
        let error = AppError::from(io::Error::new(io::ErrorKind::NotFound, "missing.json"));
        assert_eq!(error.code, ErrorCode::ResourceNotFound);

        let error = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert_eq!(error.code, ErrorCode::StorageError);
    }
}
