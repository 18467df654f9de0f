use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Repository trait for Product persistence
///
/// Each method is a single database call. Inputs are expected to be
/// validated already.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product with a generated id and timestamps
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Products matching the filter, newest first
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Atomically apply the supplied fields and return the updated product,
    /// or `None` when no product has this id
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Atomically remove a product; `false` when no product has this id
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}
