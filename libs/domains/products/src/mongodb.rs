//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc},
    options::{IndexOptions, ReturnDocument},
};
use std::time::Duration;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct, timestamp};
use crate::repository::ProductRepository;

pub const DEFAULT_COLLECTION: &str = "products";

/// Server-side time limit applied to reads, updates and deletes
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(30);

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
    query_timeout: Duration,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Product>(collection_name),
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Create the indexes backing the default listing order and the
    /// category filter
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "created_at": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "category": 1, "created_at": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category_created_at".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!(collection = %self.collection.name(), "Product indexes created");
        Ok(())
    }

    /// Build a MongoDB filter document from ProductFilter.
    ///
    /// Search text is escaped so it matches literally.
    pub fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref category) = filter.category {
            doc.insert("category", category.as_str());
        }

        if let Some(ref search) = filter.search {
            let pattern = regex::escape(search);
            doc.insert(
                "$or",
                vec![
                    doc! { "name": { "$regex": pattern.as_str(), "$options": "i" } },
                    doc! { "description": { "$regex": pattern.as_str(), "$options": "i" } },
                ],
            );
        }

        doc
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": id.to_string() }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self
            .collection
            .find_one(Self::id_filter(id))
            .max_time(self.query_timeout)
            .await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .sort(doc! { "created_at": -1, "_id": -1 })
            .max_time(self.query_timeout)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        tracing::debug!(count = products.len(), "Products listed");
        Ok(products)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let update = doc! { "$set": input.to_set_document(timestamp::now()) };

        let product = self
            .collection
            .find_one_and_update(Self::id_filter(id), update)
            .return_document(ReturnDocument::After)
            .max_time(self.query_timeout)
            .await?;

        if product.is_some() {
            tracing::info!(product_id = %id, "Product updated");
        }
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let deleted = self
            .collection
            .find_one_and_delete(Self::id_filter(id))
            .max_time(self.query_timeout)
            .await?;

        if deleted.is_some() {
            tracing::info!(product_id = %id, "Product deleted");
        }
        Ok(deleted.is_some())
    }
}
