//! Products API routes

use axum::Router;
use domain_products::{ConnectionGuard, MongoProductRepository, ProductService, handlers};

use crate::state::AppState;

fn repository(state: &AppState) -> MongoProductRepository {
    let products = &state.config.products;
    MongoProductRepository::with_collection(&state.db, &products.collection)
        .with_query_timeout(products.query_timeout())
}

/// Create products router
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(repository(state));
    let guard = ConnectionGuard::new(state.monitor.clone(), state.config.products.guard_scope);
    handlers::router(service, guard)
}

/// Initialize products indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    repository(state).init_indexes().await?;
    Ok(())
}
