//! Database library providing MongoDB connectivity and a document store adapter
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health probe and [`mongodb::DocumentStore`]
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, DocumentStore, MongoConfig, MongoDocumentStore};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "store");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let store = MongoDocumentStore::new(client.database(config.database()));
//!
//! let id = store.create_document("product", doc! { "title": "Phone" }).await?;
//! let docs = store.get_documents("product", doc! {}, 50).await?;
//! ```
//!
//! A store built with [`mongodb::MongoDocumentStore::unavailable`] fails every
//! operation with [`DatabaseError::Unavailable`], which callers can match on to
//! degrade gracefully.

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
