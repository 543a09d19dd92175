//! Product Service - Business logic layer

use database::mongodb::DocumentStore;
use database::mongodb::bson::{self, Document, doc};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreatedProduct, Product, ProductQuery};
use crate::records::{self, ProductRecord};
use crate::sample::sample_mobiles;

/// Collection holding the catalog
pub const PRODUCT_COLLECTION: &str = "product";

/// Product operations on top of a [`DocumentStore`]
///
/// `S` may be unsized, so a shared `Arc<dyn DocumentStore>` is used directly.
pub struct ProductService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
}

impl<S: DocumentStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }
}

impl<S: DocumentStore + ?Sized> ProductService<S> {
    /// Service over a store handle that is already shared
    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Persist a product and return its store-assigned id as a string
    #[instrument(skip(self, input), fields(title = %input.title, category = %input.category))]
    pub async fn create_product(&self, input: Product) -> ProductResult<CreatedProduct> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let record =
            bson::to_document(&input).map_err(|e| ProductError::Serialization(e.to_string()))?;

        let id = self
            .store
            .create_document(PRODUCT_COLLECTION, record)
            .await?;

        let id = records::id_to_string(&id);
        tracing::info!(%id, "Product created");
        Ok(CreatedProduct { id })
    }

    /// List products, falling back to the sample catalog for mobile queries
    ///
    /// The fallback engages when the query has no category (or `mobile`) and
    /// the store either returns nothing or has no connection. Any other store
    /// error is returned as-is.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<ProductRecord>> {
        let filter = match query.category() {
            Some(category) => doc! { "category": category },
            None => Document::new(),
        };

        let result = self
            .store
            .get_documents(PRODUCT_COLLECTION, filter, query.limit)
            .await
            .map_err(ProductError::from);

        match result {
            Ok(documents) if documents.is_empty() && query.wants_sample_fallback() => {
                tracing::info!("No products stored, serving sample catalog");
                sample_records()
            }
            Ok(documents) => Ok(documents.into_iter().map(records::from_document).collect()),
            Err(ProductError::DatabaseUnavailable) if query.wants_sample_fallback() => {
                tracing::warn!("Database unavailable, serving sample catalog");
                sample_records()
            }
            Err(e) => Err(e),
        }
    }
}

fn sample_records() -> ProductResult<Vec<ProductRecord>> {
    sample_mobiles().iter().map(records::from_product).collect()
}

impl<S: DocumentStore + ?Sized> Clone for ProductService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
