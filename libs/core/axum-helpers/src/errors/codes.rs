//! Type-safe error codes for API responses.
//!
//! Each code has a string form for clients (e.g. "VALIDATION_ERROR"), an
//! integer for logs and monitoring (e.g. 1001) and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid UUID format in path
    InvalidUuid,

    /// Request body could not be parsed as JSON
    JsonExtraction,

    NotFound,

    BadRequest,

    MethodNotAllowed,

    // Database errors (2000-2999)
    /// Connection to the database is not in the connected state
    DatabaseUnavailable,

    /// The driver could not reach a server while running an operation
    DatabaseConnection,

    /// Operation exceeded its server-side time limit
    DatabaseTimeout,

    /// Any other database failure
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabaseTimeout => "DATABASE_TIMEOUT",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// - 1000-1999: request errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::BadRequest => 1006,
            Self::MethodNotAllowed => 1007,

            Self::DatabaseUnavailable => 2001,
            Self::DatabaseConnection => 2002,
            Self::DatabaseError => 2003,
            Self::DatabaseTimeout => 2004,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::BadRequest => "Bad request",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::DatabaseUnavailable => {
                "MongoDB is not connected. Please check your database connection string and try again."
            }
            Self::DatabaseConnection => {
                "Unable to connect to MongoDB. Please check your database connection."
            }
            Self::DatabaseTimeout => "Database operation timed out",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::DatabaseUnavailable.as_str(), "DATABASE_UNAVAILABLE");
        assert_eq!(ErrorCode::DatabaseTimeout.as_str(), "DATABASE_TIMEOUT");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::DatabaseUnavailable.code(), 2001);
        assert_eq!(ErrorCode::DatabaseError.code(), 2003);
    }

    #[test]
    fn test_error_code_serialization_matches_as_str() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::InvalidUuid,
            ErrorCode::JsonExtraction,
            ErrorCode::NotFound,
            ErrorCode::DatabaseUnavailable,
            ErrorCode::DatabaseConnection,
            ErrorCode::DatabaseTimeout,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_error_code_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"DATABASE_CONNECTION\"").unwrap();
        assert_eq!(code, ErrorCode::DatabaseConnection);
    }
}
