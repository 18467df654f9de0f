//! Database library providing MongoDB connectors and connectivity utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client configuration, connectors, ping
//!   and the [`mongodb::ConnectionMonitor`] that tracks connectivity state
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, ConnectionMonitor, MongoConfig};
//! use std::time::Duration;
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//!
//! let monitor = ConnectionMonitor::connected();
//! let heartbeat = monitor.spawn_heartbeat(client.clone(), Duration::from_secs(10));
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
