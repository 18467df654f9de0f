pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Returned for every error, with
/// - `code`: integer error code for logging/monitoring (e.g., 1001)
/// - `error`: machine-readable identifier (e.g., "VALIDATION_ERROR")
/// - `message`: human-readable message
/// - `details`: optional structured details (e.g., validation errors)
/// - `readyState`: database connection state, only on connectivity rejections
///
/// ```json
/// {
///   "code": 2001,
///   "error": "DATABASE_UNAVAILABLE",
///   "message": "MongoDB is not connected. Please check your database connection string and try again.",
///   "readyState": 0
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Database connection state (0 disconnected, 1 connected, 2 connecting, 3 disconnecting)
    #[serde(
        rename = "readyState",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ready_state: Option<u8>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
            ready_state: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_ready_state(mut self, ready_state: u8) -> Self {
        self.ready_state = Some(ready_state);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Variants carrying raw infrastructure detail (`Database`,
/// `DatabaseTimeout`, `DatabaseConnection`) log that detail and answer with the code's fixed message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database unavailable (state {ready_state}): {message}")]
    DatabaseUnavailable { ready_state: u8, message: String },

    #[error("Database connection error: {0}")]
    DatabaseConnection(String),

    #[error("Database timeout: {0}")]
    DatabaseTimeout(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {}",
                    e
                );
                let status = match &e {
                    JsonRejection::MissingJsonContentType(_) => e.status(),
                    _ => StatusCode::BAD_REQUEST,
                };
                (
                    status,
                    ErrorResponse::new(ErrorCode::JsonExtraction, e.body_text()),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        ErrorCode::ValidationError,
                        ErrorCode::ValidationError.default_message(),
                    )
                    .with_details(validation_details(&e)),
                )
            }
            AppError::InvalidUuid(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidUuid.code(), "Invalid UUID: {}", raw);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        ErrorCode::InvalidUuid,
                        format!("Invalid UUID: {}", raw),
                    ),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::BadRequest, msg),
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(ErrorCode::NotFound, msg),
                )
            }
            AppError::DatabaseUnavailable {
                ready_state,
                message,
            } => {
                tracing::warn!(
                    error_code = ErrorCode::DatabaseUnavailable.code(),
                    ready_state,
                    "Database unavailable"
                );
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(ErrorCode::DatabaseUnavailable, message)
                        .with_ready_state(ready_state),
                )
            }
            AppError::DatabaseConnection(raw) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseConnection.code(),
                    "Database connection error: {}",
                    raw
                );
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(
                        ErrorCode::DatabaseConnection,
                        ErrorCode::DatabaseConnection.default_message(),
                    ),
                )
            }
            AppError::DatabaseTimeout(raw) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseTimeout.code(),
                    "Database timeout: {}",
                    raw
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::DatabaseTimeout,
                        ErrorCode::DatabaseTimeout.default_message(),
                    ),
                )
            }
            AppError::Database(raw) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {}",
                    raw
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::DatabaseError,
                        ErrorCode::DatabaseError.default_message(),
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Field-keyed validation details: `{ "name": [{ "code", "message", "params" }] }`
pub fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(error_messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

/// Helper function to create error responses.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     "Invalid input".to_string(),
///     ErrorCode::BadRequest,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    (status, Json(ErrorResponse::new(error_code, message))).into_response()
}
