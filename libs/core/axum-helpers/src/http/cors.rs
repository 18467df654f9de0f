use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Variable holding the comma-separated list of allowed origins
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Parse a comma-separated origin list, skipping blank entries.
///
/// Fails when a value is not a valid header value or when no origin is left.
pub fn parse_allowed_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ALLOWED_ORIGIN, e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} cannot be empty", CORS_ALLOWED_ORIGIN),
        ));
    }

    Ok(origins)
}

/// CORS layer for the given origins.
///
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Authorization, Accept
/// - Credentials allowed, 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Build the CORS layer from the required `CORS_ALLOWED_ORIGIN` variable.
///
/// Examples:
/// - Development: `CORS_ALLOWED_ORIGIN=http://localhost:3000,http://localhost:5173`
/// - Production: `CORS_ALLOWED_ORIGIN=https://example.com,https://app.example.com`
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let raw = std::env::var(CORS_ALLOWED_ORIGIN).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} environment variable is required. Example: {}=http://localhost:3000",
                CORS_ALLOWED_ORIGIN, CORS_ALLOWED_ORIGIN
            ),
        )
    })?;

    let origins = parse_allowed_origins(&raw)?;
    info!("CORS configured with allowed origins: {}", raw);

    Ok(create_cors_layer(origins))
}
