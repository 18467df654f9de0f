use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use database::mongodb::ConnectionState;
use mongodb::error::ErrorKind;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

/// Server error code for `MaxTimeMSExpired`
const MAX_TIME_MS_EXPIRED: i32 = 50;

#[derive(Debug, Error)]
pub enum ProductError {
    /// Rejected before touching the database because the connection is not ready
    #[error("Database not connected (state: {0})")]
    Unavailable(ConnectionState),

    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database operation timed out: {0}")]
    Timeout(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Unavailable(state) => AppError::DatabaseUnavailable {
                ready_state: state.code(),
                message: ErrorCode::DatabaseUnavailable.default_message().to_string(),
            },
            ProductError::Connection(msg) => AppError::DatabaseConnection(msg),
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::Validation(errors) => AppError::ValidationError(errors),
            ProductError::Timeout(msg) => AppError::DatabaseTimeout(msg),
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Driver errors are split into connectivity failures, server-side time
/// limit expiry and everything else.
impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. } => ProductError::Connection(err.to_string()),
            ErrorKind::Command(command) if command.code == MAX_TIME_MS_EXPIRED => {
                ProductError::Timeout(err.to_string())
            }
            _ => ProductError::Database(err.to_string()),
        }
    }
}
