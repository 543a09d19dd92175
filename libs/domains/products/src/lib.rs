//! Products Domain
//!
//! The mobile catalog: product schema, sample fallback catalog, service and
//! HTTP handlers. Persistence goes through [`database::mongodb::DocumentStore`],
//! so any store implementation (MongoDB, in-memory test double) can back it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, sample fallback, id conversion
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │DocumentStore│  ← Generic document access (database crate)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::MongoDocumentStore;
//! use domain_products::{handlers, ProductService};
//!
//! let service = ProductService::new(MongoDocumentStore::unavailable());
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod records;
pub mod sample;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreatedProduct, Product, ProductQuery, DEFAULT_LIMIT, MOBILE_CATEGORY};
pub use records::ProductRecord;
pub use sample::sample_mobiles;
pub use service::{ProductService, PRODUCT_COLLECTION};
