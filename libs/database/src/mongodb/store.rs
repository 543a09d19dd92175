//! Document store adapter
//!
//! [`DocumentStore`] is the seam between HTTP handlers and the MongoDB driver:
//! records go in and come out as plain BSON documents addressed by collection
//! name. [`MongoDocumentStore`] is the production implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Database,
    bson::{Bson, DateTime, Document},
};
use std::sync::Arc;
use tracing::instrument;

use super::health;
use crate::common::{DatabaseError, DatabaseResult};

/// Generic access to a document database
///
/// Every operation fails with [`DatabaseError::Unavailable`] when the store has
/// no connection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the connected database, `None` when unavailable
    fn database_name(&self) -> Option<String>;

    /// Insert `record` into `collection`, returning the generated `_id`
    async fn create_document(&self, collection: &str, record: Document) -> DatabaseResult<Bson>;

    /// Fetch at most `limit` documents of `collection` matching `filter`
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> DatabaseResult<Vec<Document>>;

    /// Names of the collections in the database
    async fn list_collection_names(&self) -> DatabaseResult<Vec<String>>;

    /// Round-trip to the server
    async fn ping(&self) -> DatabaseResult<()>;
}

#[async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for Arc<T> {
    fn database_name(&self) -> Option<String> {
        (**self).database_name()
    }

    async fn create_document(&self, collection: &str, record: Document) -> DatabaseResult<Bson> {
        (**self).create_document(collection, record).await
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> DatabaseResult<Vec<Document>> {
        (**self).get_documents(collection, filter, limit).await
    }

    async fn list_collection_names(&self) -> DatabaseResult<Vec<String>> {
        (**self).list_collection_names().await
    }

    async fn ping(&self) -> DatabaseResult<()> {
        (**self).ping().await
    }
}

/// MongoDB-backed [`DocumentStore`]
///
/// Created once at startup. Cloning shares the driver's connection pool.
#[derive(Clone, Debug, Default)]
pub struct MongoDocumentStore {
    db: Option<Database>,
}

impl MongoDocumentStore {
    /// Store backed by a connected database
    ///
    /// # Example
    /// ```ignore
    /// let client = connect_from_config(&config).await?;
    /// let store = MongoDocumentStore::new(client.database(config.database()));
    /// ```
    pub fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    /// Store with no connection; every operation returns [`DatabaseError::Unavailable`]
    pub fn unavailable() -> Self {
        Self { db: None }
    }

    pub fn is_available(&self) -> bool {
        self.db.is_some()
    }

    fn database(&self) -> DatabaseResult<&Database> {
        self.db.as_ref().ok_or(DatabaseError::Unavailable)
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    fn database_name(&self) -> Option<String> {
        self.db.as_ref().map(|db| db.name().to_string())
    }

    #[instrument(skip(self, record))]
    async fn create_document(&self, collection: &str, mut record: Document) -> DatabaseResult<Bson> {
        let db = self.database()?;

        let now = DateTime::now();
        record.insert("created_at", now);
        record.insert("updated_at", now);

        let result = db
            .collection::<Document>(collection)
            .insert_one(record)
            .await?;

        tracing::debug!(inserted_id = %result.inserted_id, "Document inserted");
        Ok(result.inserted_id)
    }

    #[instrument(skip(self))]
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> DatabaseResult<Vec<Document>> {
        let db = self.database()?;

        let cursor = db
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn list_collection_names(&self) -> DatabaseResult<Vec<String>> {
        let names = self.database()?.list_collection_names().await?;
        Ok(names)
    }

    async fn ping(&self) -> DatabaseResult<()> {
        health::ping(self.database()?).await?;
        Ok(())
    }
}
