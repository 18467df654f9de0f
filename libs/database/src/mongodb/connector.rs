use mongodb::Client;
use tracing::{info, warn};

use super::MongoConfig;
use super::health::ping;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect using a MongoConfig and verify the server answers a ping
///
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
/// use core_config::FromEnv;
///
/// let config = MongoConfig::from_env()?;
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(database = %config.database, "Connecting to MongoDB");

    let client = client_from_config(config).await?;

    ping(&client)
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!(database = %config.database, "Connected to MongoDB");
    Ok(client)
}

/// Build a client without contacting the server.
///
/// The driver connects lazily on first use, so the returned client becomes
/// usable whenever the server does. Only URL parsing errors (or SRV lookups
/// for `mongodb+srv://` URLs) are reported here.
pub async fn client_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let options = config.client_options().await?;
    Ok(Client::with_options(options)?)
}

/// [`connect_from_config`] with exponential backoff between attempts
///
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config_with_retry};
/// use database::RetryConfig;
///
/// let retry = RetryConfig::new().with_max_retries(5);
/// let client = connect_from_config_with_retry(&config, Some(retry)).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    let result = match retry_config {
        Some(retry) => retry_with_backoff(|| connect_from_config(config), retry).await,
        None => retry(|| connect_from_config(config)).await,
    };

    if let Err(ref e) = result {
        warn!(error = %e, "Giving up on MongoDB connection");
    }

    result
}
