//! MongoDB connector, health probe and document store adapter

mod config;
mod connector;
mod health;
mod store;

pub use config::MongoConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use health::ping;
pub use store::{DocumentStore, MongoDocumentStore};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Database, bson};
