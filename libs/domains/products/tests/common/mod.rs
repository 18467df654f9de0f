//! In-memory repository for handler tests that do not need a database

#![allow(dead_code)]

use async_trait::async_trait;
use domain_products::models::timestamp;
use chrono::{DateTime, Utc};
use domain_products::*;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.lock().unwrap();
        let mut matching: Vec<Product> = products
            .iter()
            .filter(|p| matches_filter(&filter, p))
            .cloned()
            .collect();
        // uuid v7 ids break ties between products created in the same millisecond
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(matching)
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.lock().unwrap();
        Ok(products.iter_mut().find(|p| p.id == id).map(|product| {
            apply_update(product, input, timestamp::now());
            product.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}

/// Same semantics as the MongoDB filter: exact category, case-insensitive
/// search over name or description
pub fn matches_filter(filter: &ProductFilter, product: &Product) -> bool {
    let category_ok = filter
        .category
        .as_ref()
        .is_none_or(|category| &product.category == category);

    let search_ok = filter.search.as_ref().is_none_or(|search| {
        let needle = search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    });

    category_ok && search_ok
}

/// Same semantics as the `$set` update: supplied fields only, plus `updated_at`
pub fn apply_update(product: &mut Product, update: UpdateProduct, now: DateTime<Utc>) {
    if let Some(name) = update.name {
        product.name = name;
    }
    if let Some(description) = update.description {
        product.description = description;
    }
    if let Some(category) = update.category {
        product.category = category;
    }
    if let Some(price) = update.price {
        product.price = price;
    }
    if let Some(stock) = update.stock {
        product.stock = stock;
    }
    if let Some(image_url) = update.image_url {
        product.image_url = Some(image_url);
    }
    product.updated_at = now;
}
