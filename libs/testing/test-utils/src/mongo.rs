//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that starts a MongoDB container for testing.

use database::mongodb::{Client, MongoConfig, MongoDocumentStore, connect_from_config};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let store = mongo.store();
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub config: MongoConfig,
}

impl TestMongo {
    /// Start MongoDB 8 and connect to a database named `test`
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("8")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let config =
            MongoConfig::with_database(format!("mongodb://127.0.0.1:{}", host_port), "test");

        let client = connect_from_config(&config)
            .await
            .expect("Failed to connect to test MongoDB");

        tracing::info!(port = host_port, "Test MongoDB ready");

        Self {
            container,
            client,
            config,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// A connected [`MongoDocumentStore`] on the test database
    pub fn store(&self) -> MongoDocumentStore {
        MongoDocumentStore::new(self.client.database(self.config.database()))
    }
}
