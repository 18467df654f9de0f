//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::ConnectionMonitor;

/// 200 while the database is connected, 503 otherwise
async fn ready(State(monitor): State<ConnectionMonitor>) -> impl IntoResponse {
    let state = monitor.state();
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async move {
            if state.is_connected() {
                Ok(())
            } else {
                Err(format!("connection state is {}", state))
            }
        }),
    )];

    run_health_checks(checks).await
}

pub fn router(monitor: ConnectionMonitor) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(monitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use database::mongodb::ConnectionState;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_ready(monitor: ConnectionMonitor) -> (StatusCode, Value) {
        let response = router(monitor)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_when_connected() {
        let (status, body) = get_ready(ConnectionMonitor::connected()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_not_ready_while_connecting() {
        let monitor = ConnectionMonitor::with_state(ConnectionState::Connecting);
        let (status, body) = get_ready(monitor).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["database"], "disconnected");
    }
}
