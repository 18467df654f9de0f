//! Configuration for Products API

use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse_or, server::ServerConfig,
};
use database::mongodb::MongoConfig;
use domain_products::GuardScope;
use std::time::Duration;

pub use core_config::Environment;

const DEFAULT_COLLECTION: &str = "products";
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub products: ProductsConfig,
}

/// Settings of the product catalog itself
#[derive(Clone, Debug, PartialEq)]
pub struct ProductsConfig {
    pub collection: String,
    pub query_timeout_secs: u64,
    pub guard_scope: GuardScope,
}

impl ProductsConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
            guard_scope: GuardScope::default(),
        }
    }
}

/// - `PRODUCTS_COLLECTION` (default: products)
/// - `PRODUCTS_QUERY_TIMEOUT_SECS` (default: 30)
/// - `PRODUCTS_GUARD_SCOPE`: `all` or `reads` (default: all)
impl FromEnv for ProductsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            collection: env_or_default("PRODUCTS_COLLECTION", DEFAULT_COLLECTION),
            query_timeout_secs: env_parse_or(
                "PRODUCTS_QUERY_TIMEOUT_SECS",
                DEFAULT_QUERY_TIMEOUT_SECS,
            )?,
            guard_scope: env_parse_or("PRODUCTS_GUARD_SCOPE", GuardScope::default())?,
        })
    }
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let products = ProductsConfig::from_env()?;

        let app = app_info!();
        if mongodb.app_name.is_none() {
            mongodb.app_name = Some(app.name.to_string());
        }

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
            products,
        })
    }
}
