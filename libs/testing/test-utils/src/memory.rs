//! In-memory [`DocumentStore`] for router and service tests

use async_trait::async_trait;
use database::mongodb::DocumentStore;
use database::mongodb::bson::{Bson, DateTime, Document, oid::ObjectId};
use database::{DatabaseError, DatabaseResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// How the store answers every operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreMode {
    /// Behaves like a connected database
    Available,
    /// Behaves like a store that was never connected
    Unavailable,
    /// Every operation fails with this message, as a live but broken server would
    Failing(String),
}

/// Document store backed by a map of collections
///
/// Filters match on top-level field equality. Inserted documents get an
/// `ObjectId` `_id` and `created_at`/`updated_at` stamps, like the MongoDB store.
///
/// # Example
///
/// ```
/// use test_utils::InMemoryDocumentStore;
///
/// let store = InMemoryDocumentStore::new();
/// assert_eq!(store.len("product"), 0);
/// ```
#[derive(Debug)]
pub struct InMemoryDocumentStore {
    collections: Mutex<BTreeMap<String, Vec<Document>>>,
    mode: StoreMode,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::with_mode(StoreMode::Available)
    }
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self::with_mode(StoreMode::Unavailable)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_mode(StoreMode::Failing(message.into()))
    }

    pub fn with_mode(mode: StoreMode) -> Self {
        Self {
            collections: Mutex::new(BTreeMap::new()),
            mode,
        }
    }

    /// Insert documents directly, bypassing timestamps. Missing `_id`s are generated.
    pub fn seed(&self, collection: &str, documents: impl IntoIterator<Item = Document>) {
        let mut collections = self.collections.lock().expect("store lock poisoned");
        let stored = collections.entry(collection.to_string()).or_default();
        for mut document in documents {
            if !document.contains_key("_id") {
                document.insert("_id", ObjectId::new());
            }
            stored.push(document);
        }
    }

    /// Snapshot of a collection, in insertion order
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .expect("store lock poisoned")
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self, collection: &str) -> usize {
        self.documents(collection).len()
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn check(&self) -> DatabaseResult<()> {
        match &self.mode {
            StoreMode::Available => Ok(()),
            StoreMode::Unavailable => Err(DatabaseError::Unavailable),
            StoreMode::Failing(message) => Err(DatabaseError::ConnectionFailed(message.clone())),
        }
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    fn database_name(&self) -> Option<String> {
        match self.mode {
            StoreMode::Unavailable => None,
            _ => Some("memory".to_string()),
        }
    }

    async fn create_document(&self, collection: &str, mut record: Document) -> DatabaseResult<Bson> {
        self.check()?;

        let id = ObjectId::new();
        let now = DateTime::now();
        record.insert("_id", id);
        record.insert("created_at", now);
        record.insert("updated_at", now);

        self.collections
            .lock()
            .expect("store lock poisoned")
            .entry(collection.to_string())
            .or_default()
            .push(record);

        Ok(Bson::ObjectId(id))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> DatabaseResult<Vec<Document>> {
        self.check()?;

        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .documents(collection)
            .into_iter()
            .filter(|document| matches(document, &filter))
            .take(take)
            .collect())
    }

    async fn list_collection_names(&self) -> DatabaseResult<Vec<String>> {
        self.check()?;
        Ok(self
            .collections
            .lock()
            .expect("store lock poisoned")
            .keys()
            .cloned()
            .collect())
    }

    async fn ping(&self) -> DatabaseResult<()> {
        self.check()
    }
}
