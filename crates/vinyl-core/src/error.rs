//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Vinyl.
///
/// `Cache` never leaves the service layer: cache failures are logged and
/// absorbed where they happen. `NotFound` stays distinct from `Database`
/// all the way up so handlers can answer 404 instead of 500.
#[derive(Error, Debug)]
pub enum VinylError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Authentication Errors ============
    /// Missing or malformed authentication
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid token (bad signature, expired, or unexpected algorithm)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Invalid credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VinylError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Unauthorized(_) | Self::InvalidToken(_) | Self::InvalidCredentials => 401,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates an invalid token error.
    #[must_use]
    pub fn invalid_token<T: Into<String>>(message: T) -> Self {
        Self::InvalidToken(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for the distinguished "not found" condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for VinylError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for VinylError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `VinylError`.
    #[must_use]
    pub fn from_error(error: &VinylError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&VinylError> for ErrorResponse {
    fn from(error: &VinylError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(VinylError::not_found("Album", 1).status_code(), 404);
        assert_eq!(VinylError::validation("price must be positive").status_code(), 400);
        assert_eq!(VinylError::unauthorized("missing header").status_code(), 401);
        assert_eq!(VinylError::invalid_token("bad").status_code(), 401);
        assert_eq!(VinylError::InvalidCredentials.status_code(), 401);
        assert_eq!(VinylError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(VinylError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(VinylError::not_found("Album", 1).error_code(), "NOT_FOUND");
        assert_eq!(VinylError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(VinylError::invalid_token("bad").error_code(), "INVALID_TOKEN");
        assert_eq!(VinylError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(VinylError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(VinylError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_not_found_is_distinct_from_database() {
        assert!(VinylError::not_found("Album", "7").is_not_found());
        assert!(!VinylError::Database("connection reset".to_string()).is_not_found());
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = VinylError::from(sqlx::Error::RowNotFound);
        assert!(err.is_not_found());

        let err = VinylError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_error_constructors() {
        let not_found = VinylError::not_found("Album", "123");
        assert!(not_found.to_string().contains("Album"));
        assert!(not_found.to_string().contains("123"));

        let validation = VinylError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = VinylError::not_found("Album", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = VinylError::validation("bad input");
        let details = vec![FieldError {
            field: "title".to_string(),
            message: "Title must be 1-50 characters".to_string(),
            code: "length".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.map(|d| d.len()), Some(1));
    }
}
