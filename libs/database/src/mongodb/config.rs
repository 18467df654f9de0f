#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or};
use mongodb::options::ClientOptions;
use std::time::Duration;

const DEFAULT_MAX_POOL_SIZE: u32 = 100;
const DEFAULT_MIN_POOL_SIZE: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HEARTBEAT_SECS: u64 = 10;

/// MongoDB connection settings
///
/// Construct it manually or, with the `config` feature, from environment
/// variables.
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog")
///     .with_app_name("products-api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Application name reported in server logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,

    pub min_pool_size: u32,

    pub connect_timeout_secs: u64,

    /// How long the driver waits for a usable server before failing an operation
    pub server_selection_timeout_secs: u64,

    /// Interval between connectivity probes run by the connection monitor
    pub heartbeat_secs: u64,
}

impl MongoConfig {
    /// Config for `url` against the `default` database
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_database(url, "default")
    }

    /// Config for `url` against a named database
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_selection_timeout_secs: DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
            heartbeat_secs: DEFAULT_HEARTBEAT_SECS,
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_server_selection_timeout(mut self, secs: u64) -> Self {
        self.server_selection_timeout_secs = secs;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_secs.max(1))
    }

    /// Parse the URL and apply pool and timeout settings on top of it
    pub async fn client_options(&self) -> mongodb::error::Result<ClientOptions> {
        let mut options = ClientOptions::parse(self.url.as_str()).await?;

        options.max_pool_size = Some(self.max_pool_size);
        options.min_pool_size = Some(self.min_pool_size);
        options.connect_timeout = Some(Duration::from_secs(self.connect_timeout_secs));
        options.server_selection_timeout =
            Some(Duration::from_secs(self.server_selection_timeout_secs));

        if let Some(ref app_name) = self.app_name {
            options.app_name = Some(app_name.clone());
        }

        Ok(options)
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Load MongoConfig from environment variables
///
/// - `MONGODB_URL` or `MONGO_URL` (required)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (required)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
/// - `MONGODB_HEARTBEAT_SECS` (default: 10)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URL".to_string()))?;

        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .map_err(|_| {
                ConfigError::MissingEnvVar("MONGODB_DATABASE or MONGO_DATABASE".to_string())
            })?;

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", DEFAULT_MAX_POOL_SIZE)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", DEFAULT_MIN_POOL_SIZE)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
            )?,
            heartbeat_secs: env_parse_or("MONGODB_HEARTBEAT_SECS", DEFAULT_HEARTBEAT_SECS)?,
        })
    }
}
