//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that runs a MongoDB container for testing.

use mongodb::bson::doc;
use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

const MONGO_PORT: u16 = 27017;
const MONGO_TAG: &str = "7";

/// Test MongoDB wrapper that owns the container
///
/// The container is stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let products = mongo.database().collection::<mongodb::bson::Document>("products");
/// products.insert_one(mongodb::bson::doc! { "name": "Lamp" }).await.unwrap();
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    database_name: String,
    pub connection_string: String,
}

impl TestMongo {
    /// Start a MongoDB 7 container with a fresh `test` database
    pub async fn new() -> Self {
        Self::with_database("test").await
    }

    /// Start a container and point the handle at `database_name`
    pub async fn with_database(database_name: &str) -> Self {
        let container = Mongo::default()
            .with_tag(MONGO_TAG)
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(MONGO_PORT)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to create MongoDB client");

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .expect("MongoDB did not answer ping");

        tracing::info!(port = host_port, tag = MONGO_TAG, "Test MongoDB ready");

        Self {
            container,
            client,
            database_name: database_name.to_string(),
            connection_string,
        }
    }

    /// Cloned client handle (cheap, shares the pool)
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Handle to the test database
    pub fn database(&self) -> Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Get the connection string for manual client creation
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Document;

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_mongo_insert_find() {
        let mongo = TestMongo::new().await;
        let collection = mongo.database().collection::<Document>("items");

        collection
            .insert_one(doc! { "name": "Desk", "stock": 3 })
            .await
            .unwrap();

        let found = collection
            .find_one(doc! { "name": "Desk" })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_i32("stock").unwrap(), 3);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_mongo_named_database() {
        let mongo = TestMongo::with_database("catalog").await;
        assert_eq!(mongo.database_name(), "catalog");
        assert_eq!(mongo.database().name(), "catalog");
        assert!(mongo.connection_string().starts_with("mongodb://127.0.0.1:"));
    }
}
