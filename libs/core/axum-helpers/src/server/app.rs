use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// Sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - API routes nested under `/api`
/// - Request tracing, security headers, CORS and compression
/// - JSON 404/405 fallbacks
///
/// Health endpoints (/health, /ready) are merged by the app on top of the
/// returned router.
///
/// `CORS_ALLOWED_ORIGIN` **must** be set with comma-separated allowed
/// origins; building the router fails otherwise.
///
/// ```ignore
/// use axum_helpers::server::create_router;
///
/// let api_routes = Router::new().nest("/products", products_router);
/// let router = create_router::<ApiDoc>(api_routes)?;
/// ```
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        // gzip, br, deflate, zstd based on Accept-Encoding
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Strip trailing slashes before routing, so `/api/products/` reaches the
/// same handler as `/api/products`.
///
/// Must wrap the finished router; a layer added with `Router::layer` runs
/// after the route has been matched.
pub fn normalize_paths(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` bounded by
/// `shutdown_timeout`.
///
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::create_production_app;
///
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     client.shutdown().await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        // Sender lives in the coordinator; a closed channel also means shutdown.
        let _ = shutdown_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let app = normalize_paths(router);
    let serve_result = axum::serve(
        listener,
        axum::ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
        .with_graceful_shutdown(coordinated_shutdown(coordinator.clone()))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Server may have stopped on its own error; make sure cleanup still runs.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
