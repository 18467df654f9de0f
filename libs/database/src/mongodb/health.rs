use mongodb::{Client, bson::doc};

/// Run `{ ping: 1 }` against the admin database
///
/// ```ignore
/// use database::mongodb::{MongoConfig, client_from_config, ping};
///
/// let client = client_from_config(&config).await?;
/// let reachable = ping(&client).await.is_ok();
/// ```
pub async fn ping(client: &Client) -> mongodb::error::Result<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mongodb::{MongoConfig, client_from_config};

    #[tokio::test]
    async fn test_ping_fails_against_unreachable_server() {
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "catalog")
            .with_server_selection_timeout(1);
        let client = client_from_config(&config).await.unwrap();

        assert!(ping(&client).await.is_err());
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_ping() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        assert!(ping(&client).await.is_ok());
    }
}
