//! MongoDB connector and utilities
//!
//! Connection management, ping-based health checks and a heartbeat that
//! tracks connectivity for request guards.

mod config;
mod connector;
mod health;
mod monitor;

pub use config::MongoConfig;
pub use connector::{
    MongoError, client_from_config, connect_from_config, connect_from_config_with_retry,
};
pub use health::ping;
pub use monitor::{ConnectionMonitor, ConnectionState};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
