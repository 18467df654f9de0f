//! Products Domain
//!
//! Product catalog CRUD over MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │    Guard    │  ← 503 while the database is not connected
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::ConnectionMonitor;
//! use domain_products::{ConnectionGuard, GuardScope, MongoProductRepository, ProductService, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let service = ProductService::new(MongoProductRepository::new(&db));
//! let guard = ConnectionGuard::new(ConnectionMonitor::connected(), GuardScope::All);
//!
//! let router = handlers::router(service, guard);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use guard::{ConnectionGuard, GuardScope};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, DeleteResponse, Product, ProductFilter, UpdateProduct};
pub use self::mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
