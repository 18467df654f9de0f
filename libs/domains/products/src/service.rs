//! Product Service - validation and orchestration over the repository

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, DeleteResponse, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing the catalog operations.
///
/// Payloads are validated here before any repository call, so a rejected
/// payload never reaches the database.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter.normalized()).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Validation runs on the supplied fields only; every rule is per-field,
    /// so this is the same as validating the merged product.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<DeleteResponse> {
        if self.repository.delete(id).await? {
            Ok(DeleteResponse::deleted())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn valid_input() -> CreateProduct {
        CreateProduct {
            name: "Widget".to_string(),
            description: "Blue widget".to_string(),
            category: "gadgets".to_string(),
            price: 12.0,
            stock: 4,
            image_url: Some("https://cdn.example.com/widget.png".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_product_persists_valid_input() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(valid_input()).await.unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.stock, 4);
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_input_without_db_call() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let mut input = valid_input();
        input.category = String::new();

        let err = service.create_product(input).await.unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(id).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_list_products_normalizes_empty_params() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::default()))
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        let products = service
            .list_products(ProductFilter {
                category: Some(String::new()),
                search: Some(String::new()),
            })
            .await
            .unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_update_product_rejects_negative_price() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let update = UpdateProduct {
            price: Some(-5.0),
            ..Default::default()
        };

        let err = service
            .update_product(Uuid::now_v7(), update)
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let update = UpdateProduct {
            stock: Some(1),
            ..Default::default()
        };

        let err = service
            .update_product(Uuid::now_v7(), update)
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();
        mock_repo.expect_delete().with(eq(id)).returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        let response = service.delete_product(id).await.unwrap();

        assert_eq!(response.message, "Product deleted successfully");
    }

    #[tokio::test]
    async fn test_delete_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let err = service.delete_product(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_connection_errors_propagate() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(|_| Err(ProductError::Connection("server selection timeout".into())));

        let service = ProductService::new(mock_repo);
        let err = service
            .list_products(ProductFilter::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Connection(_)));
    }
}
